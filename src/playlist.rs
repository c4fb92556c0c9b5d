//! Playlist endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::audio::AudioItem;
use crate::protocol::playlist as p;

/// Lists the current identity's playlists.
pub async fn list(client: &Client) -> Result<Vec<p::Playlist>> {
    client.get("api/playlist/list").await
}

/// Creates a playlist.
pub async fn create(
    client: &Client,
    name: &str,
    description: Option<&str>,
) -> Result<p::Playlist> {
    let body = serde_json::json!({
        "name": name,
        "description": description,
    });
    client.post("api/playlist/create", &body).await
}

/// Deletes a playlist. Member audio files are untouched.
pub async fn delete(client: &Client, id: i64) -> Result<()> {
    client.delete(&format!("api/playlist/{id}")).await
}

/// Renames a playlist.
pub async fn rename(client: &Client, id: i64, name: &str) -> Result<()> {
    let body = serde_json::json!({ "name": name });
    client.put(&format!("api/playlist/{id}/rename"), &body).await
}

/// Lists the audio files in a playlist.
pub async fn audios(client: &Client, id: i64) -> Result<Vec<AudioItem>> {
    client.get(&format!("api/playlist/{id}/audios")).await
}

/// Adds an audio file to a playlist.
pub async fn add_audio(client: &Client, playlist_id: i64, audio_file_id: i64) -> Result<()> {
    let body = serde_json::json!({ "audioFileId": audio_file_id });
    client.post(&format!("api/playlist/{playlist_id}/audio"), &body).await
}

/// Removes an audio file from a playlist.
pub async fn remove_audio(client: &Client, playlist_id: i64, audio_id: i64) -> Result<()> {
    client.delete(&format!("api/playlist/{playlist_id}/audio/{audio_id}")).await
}
