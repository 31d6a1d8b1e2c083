//! List released history use case

use crate::application::JournalStore;
use crate::domain::{Entry, SeedDataset};
use crate::error::Result;
use crate::infrastructure::{Config, FileStore};

/// Service for reading the released history
pub struct HistoryService {
    storage: FileStore,
}

impl HistoryService {
    pub fn new(storage: FileStore) -> Self {
        HistoryService { storage }
    }

    /// Snapshot of the journal in release order, optionally limited to the
    /// most recent `limit` entries.
    pub fn execute(&self, limit: Option<usize>) -> Result<Vec<Entry>> {
        let config = Config::load_from_dir(&self.storage.root)?;
        let seed = SeedDataset::load(&self.storage.seed_path(&config.seed_file));

        let mut journal = JournalStore::new(self.storage.clone());
        journal.initialize(seed)?;

        let snapshot = journal.snapshot();
        let entries = match limit {
            Some(n) if n < snapshot.len() => snapshot[snapshot.len() - n..].to_vec(),
            _ => snapshot.to_vec(),
        };

        Ok(entries)
    }
}
