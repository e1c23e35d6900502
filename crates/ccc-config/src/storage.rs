//! Durable storage location.

use std::path::PathBuf;

use ccc_core::membership::DEFAULT_MEMBERSHIP_KEY;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_key() -> String {
    DEFAULT_MEMBERSHIP_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding key files. Empty means the platform data directory.
    #[serde(default)]
    pub dir: String,

    /// Key the joined-club list is stored under.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// Resolve the storage directory: explicit `dir`, else `<data dir>/ccc`, else `.ccc`.
    #[must_use]
    pub fn resolve_dir(&self) -> PathBuf {
        if !self.dir.is_empty() {
            return PathBuf::from(&self.dir);
        }
        dirs::data_dir().map_or_else(|| PathBuf::from(".ccc"), |dir| dir.join("ccc"))
    }

    /// The key doubles as a file name, so it must be a single path component.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the key is not usable as a
    /// file name as written.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = self.key.as_str();
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if key != key.trim() {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".to_string(),
                reason: format!("'{key}' has leading or trailing whitespace"),
            });
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".to_string(),
                reason: format!("'{key}' is not a valid file name"),
            });
        }
        Ok(())
    }
}
