//! TOML configuration loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// TOML configuration store.
///
/// Saves go through [`io::write_locked`]: concurrent savers are serialized and
/// a crashed write never leaves a truncated config behind.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a TOML file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration, falling back to `T::default()` when the file is absent.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file absent, using defaults");
            return Ok(T::default());
        }
        self.load(path)
    }

    /// Save configuration to a TOML file.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let content = toml::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        io::write_locked(path, content.as_bytes())
    }
}
