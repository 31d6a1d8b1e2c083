//! Initialize vent directory use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::Path;

/// Initialize a new vent directory at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());
    store.initialize()?;

    let config = Config::new();
    config.save_to_dir(path)?;

    println!("Initialized vent journal at {}", path.display());
    println!("Autosave quiet interval: {}s", config.autosave_secs);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_vent_dir_and_config() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();

        assert!(temp.path().join(".vent").is_dir());
        assert!(temp.path().join(".vent/config.toml").exists());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");

        init(&nested).unwrap();

        assert!(nested.join(".vent").is_dir());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
