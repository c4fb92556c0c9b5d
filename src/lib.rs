//! # VoxBox Rust Client
//!
//! A Rust client library for the VoxBox speech studio backend, covering
//! text-to-speech generation, the audio library, playlists, podcasts, chat,
//! translation, voice cloning and account management.
//!
//! ## Quick Start
//!
//! ```no_run
//! use voxbox::{Client, UserKey};
//!
//! #[tokio::main]
//! async fn main() -> voxbox::Result<()> {
//!     let key = UserKey::load_or_create("user-key".as_ref())?;
//!     let client = Client::from_env(None, Some(key.clone()))?;
//!
//!     voxbox::user::init(&client, &key).await?;
//!     let generated = client.generate("Hello, world!", "aria").await?;
//!     println!("audio at {:?}", generated.r2_url);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Shared pipeline**: every call goes through one [`Client`] that
//!   attaches the per-device `X-User-Key` header, applies a 60-second
//!   transport timeout and unwraps the backend's `{success, data, message}`
//!   envelope
//! - **Typed errors**: backend rejections ([`Error::Api`]) stay
//!   distinguishable from transport failures ([`Error::Transport`]); how to
//!   present them is the caller's decision
//! - **Async/Await**: built on tokio and reqwest for efficient async I/O
//!
//! ## Environment Configuration
//!
//! `VOXBOX_BASE_URL` overrides the backend address (default
//! `http://localhost:8080`); `VOXBOX_USER_KEY` supplies the client identity.
//! See [`Client::from_env`].

pub mod audio;
pub mod auth;
pub mod chat;
pub mod client;
pub mod error;
pub mod identity;
pub mod playlist;
pub mod podcast;
pub mod protocol;
pub mod translate;
pub mod tts;
pub mod upload;
pub mod user;
pub mod vip;
pub mod voice_clone;

pub use client::Client;
pub use error::{Error, Result};
pub use identity::UserKey;

/// Retrieves the backend base URL from the `VOXBOX_BASE_URL` environment
/// variable.
///
/// # Returns
///
/// `Some(String)` if the environment variable is set, `None` otherwise.
pub fn base_url_from_env() -> Option<String> {
    std::env::var("VOXBOX_BASE_URL").ok()
}
