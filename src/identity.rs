//! Per-installation client identity.
//!
//! Every request to the VoxBox backend carries an `X-User-Key` header that
//! associates the call with a device. The key is an opaque UUID generated
//! once and persisted on disk; it is a device correlator, not a secret.

use std::path::Path;

use crate::error::Result;

/// Opaque per-installation identifier sent as `X-User-Key` on every request.
///
/// A `UserKey` is created lazily the first time an installation needs one
/// (see [`UserKey::load_or_create`]) and is never rotated by this crate.
///
/// # Example
///
/// ```no_run
/// use voxbox::UserKey;
///
/// let key = UserKey::load_or_create("/var/lib/myapp/user-key".as_ref())?;
/// let client = voxbox::Client::new(&key);
/// # Ok::<(), voxbox::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UserKey(String);

impl UserKey {
    /// Generates a fresh random key (UUID v4).
    pub fn generate() -> Self {
        UserKey(uuid::Uuid::new_v4().to_string())
    }

    /// Reads the key persisted at `path`, generating and persisting a new
    /// one if the file does not exist or is empty.
    ///
    /// Calling this twice with the same path returns the same key, and the
    /// key is stable across restarts. Parent directories are created as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let key = contents.trim();
                if !key.is_empty() {
                    return Ok(UserKey(key.to_string()));
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        let key = Self::generate();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, key.as_str())?;
        Ok(key)
    }

    /// Retrieves the key from the `VOXBOX_USER_KEY` environment variable.
    pub fn from_env() -> Option<Self> {
        std::env::var("VOXBOX_USER_KEY").ok().map(UserKey)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserKey {
    fn from(key: String) -> Self {
        UserKey(key)
    }
}

impl From<&str> for UserKey {
    fn from(key: &str) -> Self {
        UserKey(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("voxbox-test-{}", uuid::Uuid::new_v4()))
            .join("user-key")
    }

    #[test]
    fn generate_produces_uuid_v4() {
        let key = UserKey::generate();
        let parsed = uuid::Uuid::parse_str(key.as_str()).expect("uuid shape");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn generate_produces_distinct_keys() {
        assert_ne!(UserKey::generate(), UserKey::generate());
    }

    #[test]
    fn load_or_create_is_idempotent() {
        let path = scratch_path();
        let first = UserKey::load_or_create(&path).expect("create");
        let second = UserKey::load_or_create(&path).expect("reload");
        assert_eq!(first, second);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_or_create_trims_whitespace() {
        let path = scratch_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "  abc-key \n").unwrap();
        let key = UserKey::load_or_create(&path).expect("load");
        assert_eq!(key.as_str(), "abc-key");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_or_create_replaces_empty_file() {
        let path = scratch_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "\n").unwrap();
        let key = UserKey::load_or_create(&path).expect("load");
        uuid::Uuid::parse_str(key.as_str()).expect("uuid shape");
        std::fs::remove_file(&path).ok();
    }
}
