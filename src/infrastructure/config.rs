//! Configuration management

use crate::error::{Result, VentError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default quiet interval before a draft autosave, in seconds.
pub const DEFAULT_AUTOSAVE_SECS: u64 = 2;

/// Default filename of the optional seed dataset in the vent root.
pub const DEFAULT_SEED_FILE: &str = "data.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_autosave_secs")]
    pub autosave_secs: u64,
    #[serde(default = "default_seed_file")]
    pub seed_file: String,
    pub created: DateTime<Utc>,
}

fn default_autosave_secs() -> u64 {
    DEFAULT_AUTOSAVE_SECS
}

fn default_seed_file() -> String {
    DEFAULT_SEED_FILE.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            autosave_secs: DEFAULT_AUTOSAVE_SECS,
            seed_file: DEFAULT_SEED_FILE.to_string(),
            created: Utc::now(),
        }
    }

    /// The debounce quiet interval for draft autosave
    pub fn quiet_interval(&self) -> Duration {
        Duration::seconds(self.autosave_secs as i64)
    }

    /// Load config from .vent/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".vent").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VentError::NotVentDirectory(path.to_path_buf())
            } else {
                VentError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| VentError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .vent/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let vent_dir = path.join(".vent");
        let config_path = vent_dir.join("config.toml");

        if !vent_dir.exists() {
            fs::create_dir(&vent_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| VentError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
