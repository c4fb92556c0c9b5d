//! Chat session endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::chat as p;

/// Lists the current identity's chat sessions.
pub async fn sessions(client: &Client) -> Result<Vec<p::Session>> {
    client.get("api/chat/sessions").await
}

/// Creates a new chat session.
///
/// `context_text` seeds the conversation with source material the assistant
/// should discuss.
pub async fn create_session(
    client: &Client,
    title: &str,
    context_text: Option<&str>,
) -> Result<p::Session> {
    let body = serde_json::json!({
        "title": title,
        "contextText": context_text,
    });
    client.post("api/chat/session", &body).await
}

/// Fetches the message history of a session.
pub async fn messages(client: &Client, session_id: i64) -> Result<Vec<p::Message>> {
    client.get(&format!("api/chat/session/{session_id}/messages")).await
}

/// Sends a message and returns the assistant's reply payload.
///
/// The reply shape varies with the session type (text, audio URL, or both),
/// so it is returned as raw JSON.
pub async fn send_message(
    client: &Client,
    session_id: i64,
    content: &str,
) -> Result<serde_json::Value> {
    let body = serde_json::json!({ "content": content });
    client.post(&format!("api/chat/session/{session_id}/message"), &body).await
}

/// Deletes a session and its messages.
pub async fn delete_session(client: &Client, session_id: i64) -> Result<()> {
    client.delete(&format!("api/chat/session/{session_id}")).await
}
