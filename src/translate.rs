//! Translation endpoints: text-to-text and speech-to-speech, plus history.

use crate::client::Client;
use crate::error::Result;
use crate::protocol::translate as p;

/// Translates a text between the given languages.
///
/// # Arguments
///
/// * `text` - The source text
/// * `source_lang` / `target_lang` - Language codes (e.g. "zh", "en")
pub async fn text(
    client: &Client,
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> Result<p::Translation> {
    let body = serde_json::json!({
        "text": text,
        "sourceLang": source_lang,
        "targetLang": target_lang,
        "type": "TEXT",
    });
    client.post("api/translate/text", &body).await
}

/// Translates recorded speech and synthesizes the result in the target
/// language.
///
/// # Arguments
///
/// * `audio_url` - URL of the source audio, typically obtained from
///   [`crate::upload::audio`]
/// * `voice_name` - Voice used for the synthesized translation
pub async fn speech(
    client: &Client,
    audio_url: &str,
    source_lang: &str,
    target_lang: &str,
    voice_name: &str,
) -> Result<p::Translation> {
    let body = serde_json::json!({
        "audioUrl": audio_url,
        "sourceLang": source_lang,
        "targetLang": target_lang,
        "voiceName": voice_name,
        "type": "SPEECH",
    });
    client.post("api/translate/speech", &body).await
}

/// Lists the translation history.
pub async fn list(client: &Client) -> Result<Vec<p::Translation>> {
    client.get("api/translate/list").await
}

/// Fetches one translation record.
pub async fn detail(client: &Client, id: i64) -> Result<p::Translation> {
    client.get(&format!("api/translate/{id}")).await
}
