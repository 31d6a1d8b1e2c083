//! Keyed durable record storage

use crate::error::{Result, VentError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Storage key for the journal snapshot.
pub const JOURNAL_KEY: &str = "journal";

/// Storage key for the draft record.
pub const DRAFT_KEY: &str = "draft";

/// Abstract keyed record store backing the journal and draft stores.
///
/// Reads favor availability: a missing or unreadable record is reported as
/// absent, never as a hard failure. Writes and deletes can fail, and those
/// failures surface as [`VentError::Persistence`] so callers can apply the
/// soft best-effort policy.
pub trait RecordStore {
    /// Read the record stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Write (or overwrite) the record stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the record stored under `key`. Deleting an absent record is
    /// not an error.
    fn delete(&self, key: &str) -> Result<()>;
}

/// File system implementation: one JSON file per key under `.vent/`.
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a new store rooted at the given vent directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Discover the vent root, checking the VENT_ROOT environment variable
    /// first and then walking up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("VENT_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_vent_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(VentError::Config(format!(
                    "VENT_ROOT is set to '{}' but no .vent directory found. \
                    Run 'vent init' in that directory or unset VENT_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the vent root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_vent_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(VentError::NotVentDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .vent directory
    fn has_vent_dir(path: &Path) -> bool {
        path.join(".vent").is_dir()
    }

    /// Check if the root has been initialized
    pub fn is_initialized(&self) -> bool {
        Self::has_vent_dir(&self.root)
    }

    /// Create the .vent directory structure
    pub fn initialize(&self) -> Result<()> {
        let vent_dir = self.root.join(".vent");

        if vent_dir.exists() {
            return Err(VentError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&vent_dir)?;
        Ok(())
    }

    /// Absolute path of the optional seed dataset with the given filename
    pub fn seed_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(".vent").join(format!("{}.json", key))
    }
}

impl RecordStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.record_path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, error = %e, "treating unreadable record as absent");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| VentError::Persistence(e.to_string()))?;
            }
        }

        fs::write(&path, value).map_err(|e| VentError::Persistence(e.to_string()))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.record_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(VentError::Persistence(e.to_string())),
        }
    }
}
