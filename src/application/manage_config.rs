//! Config management use case

use crate::error::{Result, VentError};
use crate::infrastructure::{Config, FileStore};

/// Service for managing vent configuration
pub struct ConfigService {
    storage: FileStore,
}

impl ConfigService {
    pub fn new(storage: FileStore) -> Self {
        ConfigService { storage }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.storage.root)?;

        match key {
            "autosave_secs" => Ok(config.autosave_secs.to_string()),
            "seed_file" => Ok(config.seed_file.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(VentError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: autosave_secs, seed_file, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.storage.root)?;

        match key {
            "autosave_secs" => {
                let secs: u64 = value.parse().map_err(|_| {
                    VentError::Config(format!(
                        "Invalid autosave_secs: '{}' (expected a whole number of seconds)",
                        value
                    ))
                })?;
                config.autosave_secs = secs;
            }
            "seed_file" => {
                config.seed_file = value.to_string();
            }
            "created" => {
                return Err(VentError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(VentError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: autosave_secs, seed_file",
                    key
                )));
            }
        }

        config.save_to_dir(&self.storage.root)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.storage.root)
    }
}
