//! Multipart file upload endpoints.
//!
//! Upload is a parallel path next to the JSON pipeline: the request body is
//! a multipart form instead of a JSON document, but the identity header and
//! the response envelope are handled identically.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::upload as p;

/// Uploads an audio file (mp3/wav/m4a/ogg/aac, up to 50 MB).
///
/// # Arguments
///
/// * `file_name` - Original file name, used by the backend to derive the
///   stored name and validate the extension
/// * `bytes` - The file contents
///
/// # Example
///
/// ```no_run
/// use voxbox::{Client, UserKey};
///
/// # async fn example() -> voxbox::Result<()> {
/// let client = Client::new(&UserKey::generate());
/// let bytes = std::fs::read("sample.wav")?;
/// let uploaded = voxbox::upload::audio(&client, "sample.wav", bytes).await?;
/// println!("stored at {}", uploaded.url);
/// # Ok(())
/// # }
/// ```
pub async fn audio(client: &Client, file_name: &str, bytes: Vec<u8>) -> Result<p::Uploaded> {
    client.upload("api/upload/audio", file_name, bytes).await
}

/// Uploads an arbitrary file.
pub async fn file(client: &Client, file_name: &str, bytes: Vec<u8>) -> Result<p::Uploaded> {
    client.upload("api/upload/file", file_name, bytes).await
}
