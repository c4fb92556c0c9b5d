//! Voice cloning endpoints.
//!
//! A clone is trained from uploaded voice samples. Training is asynchronous;
//! poll [`status`] until the clone reaches
//! [`CloneStatus::Success`](crate::protocol::voice_clone::CloneStatus) and
//! then use its `voice_id` for synthesis.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::voice_clone as p;

/// Creates a cloning task from previously uploaded samples.
///
/// # Arguments
///
/// * `name` - Display name for the cloned voice
/// * `sample_urls` - URLs of the voice samples, typically obtained from
///   [`crate::upload::audio`]
pub async fn create(client: &Client, name: &str, sample_urls: &[String]) -> Result<p::ClonedVoice> {
    let body = serde_json::json!({
        "name": name,
        "sampleUrls": sample_urls,
    });
    client.post("api/voice-clone/create", &body).await
}

/// Lists the current identity's cloned voices.
pub async fn list(client: &Client) -> Result<Vec<p::ClonedVoice>> {
    client.get("api/voice-clone/list").await
}

/// Polls the training state of one clone.
pub async fn status(client: &Client, id: i64) -> Result<p::ClonedVoice> {
    client.get(&format!("api/voice-clone/status/{id}")).await
}

/// Lists the samples a clone was trained from.
pub async fn samples(client: &Client, id: i64) -> Result<Vec<p::VoiceSample>> {
    client.get(&format!("api/voice-clone/{id}/samples")).await
}

/// Deletes a cloned voice.
pub async fn delete(client: &Client, id: i64) -> Result<()> {
    client.delete(&format!("api/voice-clone/{id}")).await
}
