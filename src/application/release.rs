//! Release use case - move text (or the current draft) into the journal

use crate::application::{DraftStore, JournalStore};
use crate::domain::SeedDataset;
use crate::error::{Result, VentError};
use crate::infrastructure::{Config, FileStore};
use chrono::{DateTime, Utc};

/// Result of a release: the new journal size, and whether the append made
/// it to durable storage (best-effort policy: a logical append can succeed
/// while durability is lost).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseOutcome {
    pub count: usize,
    pub durable: bool,
}

/// Service for releasing entries into the journal
pub struct ReleaseService {
    storage: FileStore,
}

impl ReleaseService {
    pub fn new(storage: FileStore) -> Self {
        ReleaseService { storage }
    }

    /// Release `text` when given, otherwise release the current draft.
    ///
    /// A draft-sourced release clears the draft afterwards (pending autosave
    /// cancelled, durable record deleted), so a restart does not resurrect
    /// the already-released text. An explicit-text release leaves the draft
    /// untouched.
    pub fn execute(&self, text: Option<&str>, now: DateTime<Utc>) -> Result<ReleaseOutcome> {
        let config = Config::load_from_dir(&self.storage.root)?;
        let seed = SeedDataset::load(&self.storage.seed_path(&config.seed_file));

        let mut journal = JournalStore::new(self.storage.clone());
        journal.initialize(seed)?;

        let mut draft = DraftStore::new(self.storage.clone(), config.quiet_interval());

        let (release_text, from_draft) = match text {
            Some(t) => (t.to_string(), false),
            None => {
                draft.load_draft();
                (draft.text().to_string(), true)
            }
        };

        let outcome = match journal.append(&release_text, now) {
            Ok(count) => ReleaseOutcome {
                count,
                durable: true,
            },
            // Soft policy: the entry is in the in-memory journal; report
            // the count but flag the lost durability.
            Err(VentError::Persistence(_)) => ReleaseOutcome {
                count: journal.count(),
                durable: false,
            },
            Err(e) => return Err(e),
        };

        if from_draft {
            draft.clear()?;
        }

        Ok(outcome)
    }
}
