//! Podcast generation endpoints.
//!
//! A podcast is a two-voice dialogue synthesized from source material.
//! Generation is asynchronous; poll [`detail`] until `status` leaves
//! PENDING/GENERATING.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::podcast as p;

/// Starts podcast generation from the given source text.
///
/// # Arguments
///
/// * `title` - Display title for the finished podcast
/// * `source_text` - Material the dialogue script is written from
/// * `voice_a` / `voice_b` - Voices for the two speakers
pub async fn generate(
    client: &Client,
    title: &str,
    source_text: &str,
    voice_a: &str,
    voice_b: &str,
) -> Result<p::Generated> {
    let body = serde_json::json!({
        "title": title,
        "sourceText": source_text,
        "voiceA": voice_a,
        "voiceB": voice_b,
    });
    client.post("api/podcast/generate", &body).await
}

/// Lists the current identity's podcasts.
pub async fn list(client: &Client) -> Result<Vec<p::Podcast>> {
    client.get("api/podcast/list").await
}

/// Fetches one podcast, including its script and generation state.
pub async fn detail(client: &Client, id: i64) -> Result<p::Podcast> {
    client.get(&format!("api/podcast/{id}")).await
}
