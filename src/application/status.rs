//! Journal status use case

use crate::application::draft_service::DraftStatus;
use crate::application::{DraftService, JournalStore};
use crate::domain::SeedDataset;
use crate::error::Result;
use crate::infrastructure::{Config, FileStore};

/// Combined view of the journal size and the draft state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub count: usize,
    pub draft: DraftStatus,
}

/// Service for reporting journal and draft state
pub struct StatusService {
    storage: FileStore,
}

impl StatusService {
    pub fn new(storage: FileStore) -> Self {
        StatusService { storage }
    }

    pub fn execute(&self) -> Result<Status> {
        let config = Config::load_from_dir(&self.storage.root)?;
        let seed = SeedDataset::load(&self.storage.seed_path(&config.seed_file));

        let mut journal = JournalStore::new(self.storage.clone());
        journal.initialize(seed)?;

        let draft = DraftService::new(self.storage.clone()).show()?;

        Ok(Status {
            count: journal.count(),
            draft,
        })
    }
}
