//! User identity registration and profile endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::identity::UserKey;
use crate::protocol::user as p;

/// Registers the device key with the backend, creating the server-side user
/// record on first contact.
///
/// Safe to call repeatedly; the backend returns the existing record when the
/// key is already known.
pub async fn init(client: &Client, user_key: &UserKey) -> Result<p::UserInit> {
    let body = serde_json::json!({ "userKey": user_key.as_str() });
    client.post("api/user/init", &body).await
}

/// Fetches the profile of the current identity.
pub async fn profile(client: &Client) -> Result<p::Profile> {
    client.get("api/user/profile").await
}

/// Updates nickname and/or avatar. Fields left as `None` are not changed.
pub async fn update_profile(
    client: &Client,
    nickname: Option<&str>,
    avatar: Option<&str>,
) -> Result<p::Profile> {
    let body = serde_json::json!({
        "nickname": nickname,
        "avatar": avatar,
    });
    client.put("api/user/profile", &body).await
}
