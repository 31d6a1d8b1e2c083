//! One-shot draft use cases for the CLI

use crate::application::DraftStore;
use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use chrono::{DateTime, Utc};

/// A point-in-time view of the draft for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftStatus {
    pub text: String,
    pub last_saved: Option<DateTime<Utc>>,
}

/// Service for manipulating the draft from one-shot CLI invocations.
///
/// A one-shot process cannot wait out the quiet interval, so `set` flushes
/// immediately after scheduling; the debounce proper is exercised by the
/// interactive compose loop.
pub struct DraftService {
    storage: FileStore,
}

impl DraftService {
    pub fn new(storage: FileStore) -> Self {
        DraftService { storage }
    }

    fn open(&self) -> Result<DraftStore<FileStore>> {
        let config = Config::load_from_dir(&self.storage.root)?;
        let mut draft = DraftStore::new(self.storage.clone(), config.quiet_interval());
        draft.load_draft();
        Ok(draft)
    }

    /// Replace the draft text and persist it right away.
    pub fn set(&self, text: &str, now: DateTime<Utc>) -> Result<()> {
        let mut draft = self.open()?;
        draft.set_text(text, now);
        draft.flush(now)
    }

    /// Current draft text and last-saved instant.
    pub fn show(&self) -> Result<DraftStatus> {
        let draft = self.open()?;
        Ok(DraftStatus {
            text: draft.text().to_string(),
            last_saved: draft.last_saved(),
        })
    }

    /// Discard the draft and its durable record.
    pub fn clear(&self) -> Result<()> {
        let mut draft = self.open()?;
        draft.clear()
    }
}
