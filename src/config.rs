//! Configuration for the registry.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::naming::MAX_NAME_LENGTH;
use crate::persistence::STORAGE_KEY;
use crate::stable::INVENTORY_LIMIT;

/// Registry settings. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Longest composed name label, in characters (default: 18).
    pub max_name_length: usize,

    /// Horses kept in the stable (default: 6).
    pub inventory_limit: usize,

    /// Key the stable document is stored under.
    pub storage_key: String,

    /// Directory for the file store. `None` uses the platform data dir.
    pub state_dir: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_name_length: MAX_NAME_LENGTH,
            inventory_limit: INVENTORY_LIMIT,
            storage_key: STORAGE_KEY.to_string(),
            state_dir: None,
        }
    }
}

impl RegistryConfig {
    /// Load a JSON config file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_name_length == 0 {
            return Err(ConfigError::Invalid {
                field: "max_name_length",
                reason: "must be at least 1".into(),
            });
        }
        if self.inventory_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "inventory_limit",
                reason: "must be at least 1".into(),
            });
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage_key",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// The directory the file store should use.
    ///
    /// - Linux: `~/.local/share/stable-registry` (or `$XDG_DATA_HOME/...`)
    /// - macOS: `~/Library/Application Support/stable-registry`
    /// - Windows: `%APPDATA%\stable-registry`
    /// - Fallback: `./save_data`
    pub fn resolved_state_dir(&self) -> PathBuf {
        if let Some(dir) = &self.state_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", "stable-registry")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
    }
}
