//! Export use case - write the full history as a plain-text document

use crate::application::JournalStore;
use crate::domain::SeedDataset;
use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Service for exporting the released history
pub struct ExportService {
    storage: FileStore,
}

impl ExportService {
    pub fn new(storage: FileStore) -> Self {
        ExportService { storage }
    }

    /// Render the export document and write it to `output_dir` (the vent
    /// root when not given), using the `feelings_released_<date>.txt`
    /// filename convention. Returns the written path.
    ///
    /// Fails with [`crate::error::VentError::EmptyJournal`] when there is
    /// nothing to export; no file is produced in that case.
    pub fn execute(&self, output_dir: Option<&Path>, now: DateTime<Utc>) -> Result<PathBuf> {
        let config = Config::load_from_dir(&self.storage.root)?;
        let seed = SeedDataset::load(&self.storage.seed_path(&config.seed_file));

        let mut journal = JournalStore::new(self.storage.clone());
        journal.initialize(seed)?;

        let doc = journal.export_all(now)?;

        let dir = output_dir.unwrap_or_else(|| self.storage.root.as_path());
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let path = dir.join(&doc.filename);
        fs::write(&path, &doc.content)?;

        Ok(path)
    }
}
