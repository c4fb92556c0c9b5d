//! Text-to-speech endpoints.
//!
//! Two engines are exposed: the classic engine (`voices` / `generate`) for
//! short texts, and the v2 engine (`v2_voices` / `v2_synthesize`) which
//! supports emotion modes, context text and per-segment subtitles. Long
//! texts go through the asynchronous task flow in [`crate::audio`].

use crate::client::Client;
use crate::error::Result;
use crate::protocol::tts as p;

/// Lists the voices offered by the classic TTS engine.
pub async fn voices(client: &Client) -> Result<Vec<p::Voice>> {
    client.get("api/tts/voices").await
}

/// Generates audio for a short text (up to a few hundred characters).
///
/// The backend synthesizes synchronously and returns the stored audio URL.
/// For long texts use [`crate::audio::generate_long`] and poll
/// [`crate::audio::task_status`].
///
/// # Arguments
///
/// * `raw_text` - The text to synthesize
/// * `voice_name` - A voice name from [`voices`]
///
/// # Example
///
/// ```no_run
/// use voxbox::{Client, UserKey};
///
/// # async fn example() -> voxbox::Result<()> {
/// let client = Client::new(&UserKey::generate());
/// let generated = voxbox::tts::generate(&client, "Hello, world!", "aria").await?;
/// println!("audio at {:?}", generated.r2_url);
/// # Ok(())
/// # }
/// ```
pub async fn generate(client: &Client, raw_text: &str, voice_name: &str) -> Result<p::Generated> {
    let body = serde_json::json!({
        "rawText": raw_text,
        "voiceName": voice_name,
    });
    client.post("api/tts/generate", &body).await
}

/// Lists the voices offered by the v2 engine.
pub async fn v2_voices(client: &Client) -> Result<Vec<p::V2Voice>> {
    client.get("api/tts/v2/voices").await
}

/// Synthesizes speech with the v2 engine.
///
/// # Arguments
///
/// * `request` - Text, voice and mode configuration (see
///   [`p::V2Request::new`])
///
/// # Errors
///
/// Returns an error if the backend rejects the request (e.g. character
/// quota exhausted) or the transport fails.
pub async fn v2_synthesize(client: &Client, request: p::V2Request) -> Result<p::V2Response> {
    client.post("api/tts/v2/synthesize", &request).await
}
