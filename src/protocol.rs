//! Wire types for the VoxBox backend API.
//!
//! This module contains the response envelope shared by every endpoint and
//! the request/response types of each backend domain. Field names follow the
//! backend's camelCase convention via serde renames.

use crate::error::{Error, Result};

/// The `{success, data, message}` wrapper every backend response uses.
///
/// Callers never handle the envelope directly; the request pipeline unwraps
/// it and returns the typed `data` payload, or an [`Error::Api`] carrying
/// `message` when `success` is false.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    /// Whether the backend accepted the request.
    pub success: bool,
    /// Payload, present on success. `null` for operations with no result.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Human-readable message, set when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Unwraps the envelope into its typed payload.
    ///
    /// On `success: true` the `data` value is deserialized into `T`; a
    /// `null` payload deserializes into `()` or `Option<T>`. On
    /// `success: false` this returns [`Error::Api`] with the envelope's
    /// message, falling back to a generic failure string when absent.
    pub fn into_data<T: serde::de::DeserializeOwned>(self) -> Result<T> {
        if self.success {
            Ok(serde_json::from_value(self.data)?)
        } else {
            match self.message {
                Some(message) if !message.is_empty() => Err(Error::Api { message }),
                _ => Err(Error::generic_api()),
            }
        }
    }
}

/// Authentication types.
pub mod auth {
    /// Purpose of a verification code request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CodeType {
        Login,
        Register,
    }

    impl CodeType {
        pub fn as_str(&self) -> &'static str {
            match self {
                CodeType::Login => "LOGIN",
                CodeType::Register => "REGISTER",
            }
        }
    }

    /// Credentials for register / login calls.
    ///
    /// The backend accepts the same body shape for all three flows; which
    /// fields are required depends on the endpoint (password login wants
    /// `password`, code login wants `code`).
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Credentials {
        pub phone: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub code: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub password: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub captcha: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub captcha_id: Option<String>,
    }

    impl Credentials {
        pub fn new(phone: &str) -> Self {
            Self {
                phone: phone.to_string(),
                code: None,
                password: None,
                captcha: None,
                captcha_id: None,
            }
        }

        pub fn with_password(mut self, password: &str) -> Self {
            self.password = Some(password.to_string());
            self
        }

        pub fn with_code(mut self, code: &str) -> Self {
            self.code = Some(code.to_string());
            self
        }

        pub fn with_captcha(mut self, captcha: &str, captcha_id: &str) -> Self {
            self.captcha = Some(captcha.to_string());
            self.captcha_id = Some(captcha_id.to_string());
            self
        }
    }

    /// Account information returned by login and `auth/info`.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Account {
        pub id: i64,
        #[serde(default)]
        pub user_key: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub nickname: Option<String>,
        #[serde(default)]
        pub avatar: Option<String>,
        #[serde(default)]
        pub user_type: Option<String>,
        #[serde(default)]
        pub vip_expire_date: Option<String>,
        #[serde(default)]
        pub monthly_char_limit: Option<i64>,
        #[serde(default)]
        pub monthly_char_used: Option<i64>,
        #[serde(default)]
        pub create_time: Option<String>,
    }

    /// Successful register / login result.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    pub struct AuthResponse {
        /// Session token issued by the backend.
        pub token: String,
        pub user: Account,
    }
}

/// VIP plan and order types.
pub mod vip {
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Plan {
        #[serde(rename = "type")]
        pub plan_type: String,
        pub name: String,
        pub days: i64,
        pub price: f64,
        pub char_limit: i64,
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Order {
        pub id: i64,
        #[serde(default)]
        pub user_id: Option<i64>,
        pub order_no: String,
        pub plan_type: String,
        pub amount: f64,
        /// PENDING, PAID or CANCELLED.
        pub status: String,
        #[serde(default)]
        pub paid_at: Option<String>,
        #[serde(default)]
        pub created_at: Option<String>,
    }
}

/// User identity and profile types.
pub mod user {
    /// Result of registering a device key with the backend.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UserInit {
        pub user_id: i64,
        pub user_key: String,
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Profile {
        pub id: i64,
        #[serde(default)]
        pub nickname: Option<String>,
        #[serde(default)]
        pub avatar: Option<String>,
        #[serde(default)]
        pub create_time: Option<String>,
    }
}

/// Text-to-speech types, covering both the classic and the v2 engine.
pub mod tts {
    /// A voice offered by the classic TTS engine.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Voice {
        pub name: String,
        #[serde(default)]
        pub locale: Option<String>,
        #[serde(default)]
        pub gender: Option<String>,
        #[serde(default)]
        pub short_name: Option<String>,
    }

    /// A voice offered by the v2 engine.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct V2Voice {
        pub id: String,
        pub name: String,
        #[serde(default)]
        pub language: Option<String>,
        #[serde(default)]
        pub gender: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub supports_emotion: bool,
        #[serde(default)]
        pub supports_context: bool,
    }

    /// Result of a generation request. Long-text generation returns a
    /// `task_id` to poll instead of a finished URL.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Generated {
        #[serde(default)]
        pub audio_id: Option<i64>,
        #[serde(default)]
        pub r2_url: Option<String>,
        /// Temporary URL used when durable storage is unavailable.
        #[serde(default)]
        pub audio_url: Option<String>,
        #[serde(default)]
        pub duration: Option<i64>,
        #[serde(default)]
        pub task_id: Option<String>,
    }

    /// Configuration for a v2 synthesis request.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct V2Request {
        pub text: String,
        /// Preceding text the voice should stay coherent with.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub context_text: Option<String>,
        pub voice_type: String,
        pub mode: String,
    }

    impl V2Request {
        /// Creates a request for the given text and voice with the default
        /// synthesis mode.
        pub fn new(text: &str, voice_type: &str) -> Self {
            Self {
                text: text.to_string(),
                context_text: None,
                voice_type: voice_type.to_string(),
                mode: "default".to_string(),
            }
        }

        pub fn with_context_text(mut self, context_text: &str) -> Self {
            self.context_text = Some(context_text.to_string());
            self
        }

        pub fn with_mode(mut self, mode: &str) -> Self {
            self.mode = mode.to_string();
            self
        }
    }

    /// Finished v2 synthesis with per-segment subtitles.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct V2Response {
        pub audio_url: String,
        #[serde(default)]
        pub duration: Option<i64>,
        #[serde(default)]
        pub subtitles: Vec<Subtitle>,
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Subtitle {
        pub text: String,
        /// Start offset in milliseconds.
        pub start_time: i64,
        /// End offset in milliseconds.
        pub end_time: i64,
    }
}

/// Audio library types.
pub mod audio {
    /// An entry in the user's audio library or collection.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AudioItem {
        pub id: i64,
        #[serde(default)]
        pub r2_url: Option<String>,
        #[serde(default)]
        pub raw_text: Option<String>,
        #[serde(default)]
        pub voice_name: Option<String>,
        #[serde(default)]
        pub duration: Option<i64>,
        #[serde(default)]
        pub create_time: Option<String>,
        #[serde(default)]
        pub title: Option<String>,
    }

    /// Full detail of an audio file, including the complete source text.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AudioDetail {
        pub id: i64,
        #[serde(default)]
        pub r2_url: Option<String>,
        #[serde(default)]
        pub raw_text: Option<String>,
        #[serde(default)]
        pub voice_name: Option<String>,
        #[serde(default)]
        pub duration: Option<i64>,
        #[serde(default)]
        pub title: Option<String>,
        /// Creation time as epoch milliseconds.
        #[serde(default)]
        pub create_time: Option<i64>,
    }

    /// Result of toggling a collection mark.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    pub struct Collected {
        /// Whether the audio is collected after the toggle.
        pub collected: bool,
    }
}

/// Multipart upload result types.
pub mod upload {
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Uploaded {
        /// Public URL of the stored file.
        pub url: String,
        #[serde(default)]
        pub duration: Option<i64>,
        #[serde(default)]
        pub file_name: Option<String>,
    }
}

/// Chat session types.
pub mod chat {
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Session {
        pub id: i64,
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub session_type: Option<String>,
        #[serde(default)]
        pub context_text: Option<String>,
        #[serde(default)]
        pub last_message_time: Option<String>,
        #[serde(default)]
        pub create_time: Option<String>,
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Message {
        pub id: i64,
        /// "user" or "assistant".
        pub role: String,
        pub content: String,
        #[serde(default)]
        pub audio_url: Option<String>,
        #[serde(default)]
        pub audio_duration: Option<i64>,
        #[serde(default)]
        pub create_time: Option<String>,
    }
}

/// Playlist types.
pub mod playlist {
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Playlist {
        pub id: i64,
        pub name: String,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub cover_url: Option<String>,
        #[serde(default)]
        pub audio_count: Option<i64>,
        #[serde(default)]
        pub total_duration: Option<i64>,
        #[serde(default)]
        pub create_time: Option<String>,
    }
}

/// Podcast generation types.
pub mod podcast {
    /// Result of kicking off podcast generation.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Generated {
        pub podcast_id: i64,
        pub status: String,
        #[serde(default)]
        pub audio_url: Option<String>,
        #[serde(default)]
        pub duration: Option<i64>,
        #[serde(default)]
        pub script_content: Option<String>,
        #[serde(default)]
        pub message: Option<String>,
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Podcast {
        pub id: i64,
        pub title: String,
        #[serde(default)]
        pub source_text: Option<String>,
        #[serde(default)]
        pub script_content: Option<String>,
        #[serde(default)]
        pub voice_a: Option<String>,
        #[serde(default)]
        pub voice_b: Option<String>,
        #[serde(default)]
        pub audio_url: Option<String>,
        #[serde(default)]
        pub duration: Option<i64>,
        /// PENDING, GENERATING, SUCCESS or FAILED.
        pub status: String,
        #[serde(default)]
        pub error_message: Option<String>,
        #[serde(default)]
        pub create_time: Option<String>,
        #[serde(default)]
        pub update_time: Option<String>,
    }
}

/// Translation types.
pub mod translate {
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Translation {
        pub id: i64,
        #[serde(default)]
        pub source_text: Option<String>,
        #[serde(default)]
        pub translated_text: Option<String>,
        pub source_lang: String,
        pub target_lang: String,
        #[serde(default)]
        pub source_audio_url: Option<String>,
        #[serde(default)]
        pub translated_audio_url: Option<String>,
        #[serde(default)]
        pub translated_audio_duration: Option<i64>,
        /// TEXT or SPEECH.
        #[serde(rename = "type", default)]
        pub translation_type: Option<String>,
        #[serde(default)]
        pub create_time: Option<String>,
    }
}

/// Voice cloning types.
pub mod voice_clone {
    /// Lifecycle state of a cloning task.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum CloneStatus {
        Pending,
        Processing,
        Success,
        Failed,
        Other(String),
    }

    impl<'de> serde::Deserialize<'de> for CloneStatus {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            let status = match s.as_str() {
                "PENDING" => CloneStatus::Pending,
                "PROCESSING" => CloneStatus::Processing,
                "SUCCESS" => CloneStatus::Success,
                "FAILED" => CloneStatus::Failed,
                other => CloneStatus::Other(other.to_string()),
            };
            Ok(status)
        }
    }

    impl serde::Serialize for CloneStatus {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            let s = match self {
                CloneStatus::Pending => "PENDING",
                CloneStatus::Processing => "PROCESSING",
                CloneStatus::Success => "SUCCESS",
                CloneStatus::Failed => "FAILED",
                CloneStatus::Other(other) => other.as_str(),
            };
            serializer.serialize_str(s)
        }
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ClonedVoice {
        pub id: i64,
        pub name: String,
        /// Backend voice identifier, usable in synthesis once the clone
        /// succeeds.
        #[serde(default)]
        pub voice_id: Option<String>,
        pub status: CloneStatus,
        #[serde(default)]
        pub sample_count: Option<i64>,
        #[serde(default)]
        pub error_message: Option<String>,
        #[serde(default)]
        pub create_time: Option<String>,
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct VoiceSample {
        pub id: i64,
        pub audio_url: String,
        #[serde(default)]
        pub duration: Option<i64>,
        #[serde(default)]
        pub status: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_unwraps_data() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"success":true,"data":{"userId":7,"userKey":"k"},"message":""}"#)
                .unwrap();
        let init: user::UserInit = envelope.into_data().unwrap();
        assert_eq!(init.user_id, 7);
        assert_eq!(init.user_key, "k");
    }

    #[test]
    fn envelope_failure_carries_message() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"success":false,"data":null,"message":"quota exceeded"}"#)
                .unwrap();
        let err = envelope.into_data::<serde_json::Value>().unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn envelope_failure_without_message_uses_fallback() {
        let envelope: Envelope = serde_json::from_str(r#"{"success":false}"#).unwrap();
        let err = envelope.into_data::<serde_json::Value>().unwrap_err();
        assert_eq!(err.to_string(), "request failed");
    }

    #[test]
    fn envelope_null_data_unwraps_to_unit() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"success":true,"data":null,"message":""}"#).unwrap();
        envelope.into_data::<()>().unwrap();
    }

    #[test]
    fn envelope_missing_data_unwraps_to_none() {
        let envelope: Envelope = serde_json::from_str(r#"{"success":true}"#).unwrap();
        let data: Option<audio::AudioItem> = envelope.into_data().unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn credentials_serialize_camel_case() {
        let body = auth::Credentials::new("13800000000")
            .with_password("hunter2")
            .with_captcha("abcd", "cap-1");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "phone": "13800000000",
                "password": "hunter2",
                "captcha": "abcd",
                "captchaId": "cap-1",
            })
        );
    }

    #[test]
    fn v2_request_defaults_to_default_mode() {
        let req = tts::V2Request::new("hello", "warm-male");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "hello",
                "voiceType": "warm-male",
                "mode": "default",
            })
        );
    }

    #[test]
    fn clone_status_round_trips_known_and_unknown() {
        let status: voice_clone::CloneStatus = serde_json::from_str(r#""SUCCESS""#).unwrap();
        assert_eq!(status, voice_clone::CloneStatus::Success);
        let status: voice_clone::CloneStatus = serde_json::from_str(r#""ARCHIVED""#).unwrap();
        assert_eq!(status, voice_clone::CloneStatus::Other("ARCHIVED".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""ARCHIVED""#);
    }

    #[test]
    fn translation_type_uses_wire_name() {
        let json = r#"{"id":1,"sourceLang":"zh","targetLang":"en","type":"TEXT"}"#;
        let t: translate::Translation = serde_json::from_str(json).unwrap();
        assert_eq!(t.translation_type.as_deref(), Some("TEXT"));
    }
}
