//! Persistence gateway for the user profile.
//!
//! The whole persisted state is one JSON object stored under a fixed key.
//! Reads and writes are typed inside the gateway; the app only sees the
//! best-effort wrappers, which log and swallow failures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::UserProfile;

/// Storage key; the profile file is `<key>.json`
pub const STORAGE_KEY: &str = "squish-sparkle-app";

/// Directory under the platform data dir that holds app files
pub const APP_DIR: &str = "squish-sparkle";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed profile data in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Local key-value store holding the single profile record
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform data directory for the app, falling back to the working directory
    pub fn app_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// `<data dir>/squish-sparkle/squish-sparkle-app.json`
    pub fn default_path() -> PathBuf {
        Self::app_dir().join(format!("{STORAGE_KEY}.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored profile. `Ok(None)` when nothing has been stored yet.
    pub fn read(&self) -> Result<Option<UserProfile>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })
    }

    /// Replace the stored profile
    pub fn write(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string(profile).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }

    /// Stored profile merged over defaults; any failure yields the defaults
    pub fn load_or_default(&self) -> UserProfile {
        match self.read() {
            Ok(Some(profile)) => {
                debug!(setup_complete = profile.setup_complete, "Profile loaded");
                profile
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "No stored profile, using defaults");
                UserProfile::default()
            }
            Err(e) => {
                warn!("Profile load failed, using defaults: {e}");
                UserProfile::default()
            }
        }
    }

    /// Write the profile, logging instead of failing
    pub fn save_best_effort(&self, profile: &UserProfile) {
        match self.write(profile) {
            Ok(()) => info!(path = %self.path.display(), "Profile saved"),
            Err(e) => warn!("Profile save failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("profile.json"));
        assert!(store.read().unwrap().is_none());
        assert_eq!(store.load_or_default(), UserProfile::default());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("profile.json"));
        let profile = UserProfile::from_setup("Mia").unwrap();

        store.write(&profile).unwrap();
        assert_eq!(store.read().unwrap(), Some(profile));
    }

    #[test]
    fn test_written_object_is_exact() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("profile.json"));
        let profile = UserProfile::from_setup("Mia").unwrap();
        store.write(&profile).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let expected = serde_json::json!({"userName": "Mia", "setupComplete": true});
        assert_eq!(value, expected);
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"userName":"Zoe"}"#).unwrap();

        let profile = Store::new(&path).load_or_default();
        assert_eq!(profile.user_name, "Zoe");
        assert!(!profile.setup_complete);
    }

    #[test]
    fn test_mistyped_key_keeps_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"userName":null,"setupComplete":true}"#).unwrap();

        let profile = Store::new(&path).load_or_default();
        assert!(profile.setup_complete);
        assert_eq!(profile.display_name(), "You");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{not json").unwrap();

        let store = Store::new(&path);
        assert!(matches!(store.read(), Err(StoreError::Json { .. })));
        assert_eq!(store.load_or_default(), UserProfile::default());
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // A directory where the file should be makes the write fail
        let path = dir.path().join("profile.json");
        fs::create_dir(&path).unwrap();

        let store = Store::new(&path);
        assert!(store.write(&UserProfile::default()).is_err());
        store.save_best_effort(&UserProfile::default());
    }

    #[test]
    fn test_default_path_uses_storage_key() {
        let path = Store::default_path();
        assert!(path.ends_with(format!("{APP_DIR}/{STORAGE_KEY}.json")));
    }
}
