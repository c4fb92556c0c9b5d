//! Audio library endpoints: long-text generation, listing, collection and
//! housekeeping.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::tts::Generated;
use crate::protocol::audio as p;

/// Kicks off asynchronous generation for a long text.
///
/// Returns a [`Generated`] whose `task_id` must be polled with
/// [`task_status`] until the audio URL appears.
///
/// # Arguments
///
/// * `raw_text` - The text to synthesize; may be arbitrarily long
/// * `voice_name` - A voice name from [`crate::tts::voices`]
/// * `use_emotion` - Whether to run the emotion-prediction variant
pub async fn generate_long(
    client: &Client,
    raw_text: &str,
    voice_name: &str,
    use_emotion: bool,
) -> Result<Generated> {
    let body = serde_json::json!({
        "rawText": raw_text,
        "voiceName": voice_name,
        "useEmotion": use_emotion,
    });
    client.post("api/audio/generate-long", &body).await
}

/// Polls the state of a long-text generation task.
pub async fn task_status(
    client: &Client,
    audio_file_id: i64,
    task_id: &str,
    use_emotion: bool,
) -> Result<Generated> {
    let query = [
        ("audioFileId", audio_file_id.to_string()),
        ("taskId", task_id.to_string()),
        ("useEmotion", use_emotion.to_string()),
    ];
    client.get_with_query("api/audio/task-status", &query).await
}

/// Lists the current identity's audio library.
pub async fn my_list(client: &Client) -> Result<Vec<p::AudioItem>> {
    client.get("api/audio/my-list").await
}

/// Fetches one audio file with its complete source text.
pub async fn detail(client: &Client, id: i64) -> Result<p::AudioDetail> {
    let query = [("id", id.to_string())];
    client.get_with_query("api/audio/detail", &query).await
}

/// Toggles the collection mark on an audio file.
pub async fn collect(client: &Client, audio_id: i64) -> Result<p::Collected> {
    let body = serde_json::json!({ "audioId": audio_id });
    client.post("api/audio/collect", &body).await
}

/// Lists the collected audio files.
pub async fn collect_list(client: &Client) -> Result<Vec<p::AudioItem>> {
    client.get("api/audio/collect-list").await
}

/// Deletes one audio file.
pub async fn delete(client: &Client, id: i64) -> Result<()> {
    client.delete(&format!("api/audio/{id}")).await
}

/// Deletes several audio files in one call.
pub async fn delete_batch(client: &Client, ids: &[i64]) -> Result<()> {
    let body = serde_json::json!({ "ids": ids });
    client.delete_with_body("api/audio/batch", &body).await
}

/// Renames an audio file.
pub async fn rename(client: &Client, id: i64, name: &str) -> Result<()> {
    let body = serde_json::json!({ "name": name });
    client.put(&format!("api/audio/{id}/rename"), &body).await
}

/// Removes an audio file from the collection.
pub async fn delete_collect(client: &Client, id: i64) -> Result<()> {
    client.delete(&format!("api/audio/collect/{id}")).await
}
