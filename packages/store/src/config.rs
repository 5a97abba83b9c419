//! # Application configuration — `relief.toml`
//!
//! Optional TOML file read from the platform data directory on native targets
//! (filename: [`ReliefConfig::filename`] = `"relief.toml"`). The web build always
//! uses the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! key = "resources"   # storage key holding the JSON resource list
//! ```
//!
//! All structs derive `Default` so that a missing or empty file is equivalent to
//! the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `relief.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReliefConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the resource list is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_key() -> String {
    "resources".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
        }
    }
}

impl ReliefConfig {
    /// Builder method to set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage.key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "relief.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `relief.toml` from `dir`, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_from_dir(dir: &Path) -> Self {
        let path = dir.join(Self::filename());
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_toml(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
