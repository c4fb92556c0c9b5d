//! Account authentication endpoints.
//!
//! Phone-based registration and login. All flows return an
//! [`p::AuthResponse`] carrying the session token and the account record.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::auth as p;

/// Requests a verification code to be sent to `phone`.
///
/// # Arguments
///
/// * `phone` - The phone number to message
/// * `code_type` - What the code will be used for (login or registration)
pub async fn send_code(client: &Client, phone: &str, code_type: p::CodeType) -> Result<()> {
    let query = [
        ("phone", phone.to_string()),
        ("type", code_type.as_str().to_string()),
    ];
    client.post_with_query("api/auth/send-code", &query).await
}

/// Registers a new account.
///
/// The credentials must carry the verification code obtained via
/// [`send_code`] with [`p::CodeType::Register`].
pub async fn register(client: &Client, credentials: &p::Credentials) -> Result<p::AuthResponse> {
    client.post("api/auth/register", credentials).await
}

/// Logs in with phone and password.
///
/// # Example
///
/// ```no_run
/// use voxbox::{Client, UserKey};
/// use voxbox::protocol::auth::Credentials;
///
/// # async fn example() -> voxbox::Result<()> {
/// let client = Client::new(&UserKey::generate());
/// let auth = voxbox::auth::login(
///     &client,
///     &Credentials::new("13800000000").with_password("secret"),
/// )
/// .await?;
/// println!("token: {}", auth.token);
/// # Ok(())
/// # }
/// ```
pub async fn login(client: &Client, credentials: &p::Credentials) -> Result<p::AuthResponse> {
    client.post("api/auth/login", credentials).await
}

/// Logs in with phone and a verification code.
pub async fn login_by_code(client: &Client, phone: &str, code: &str) -> Result<p::AuthResponse> {
    let credentials = p::Credentials::new(phone).with_code(code);
    client.post("api/auth/login-by-code", &credentials).await
}

/// Fetches the account behind the current identity.
pub async fn info(client: &Client) -> Result<p::Account> {
    client.get("api/auth/info").await
}
