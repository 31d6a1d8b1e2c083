//! Journal store - the durable, append-only record of released entries

use crate::domain::{export, Entry, ExportDocument, SeedDataset};
use crate::error::{Result, VentError};
use crate::infrastructure::{RecordStore, JOURNAL_KEY};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Source of truth for the ordered history of released entries.
///
/// The store owns the only in-memory copy of the journal. Consumers observe
/// it through [`count`](JournalStore::count) and
/// [`snapshot`](JournalStore::snapshot); there is no delete operation and the
/// length only increases during a process's lifetime.
///
/// Persistence is best-effort: a failed write leaves the in-memory journal
/// authoritative for the rest of the session and surfaces as a soft
/// [`VentError::Persistence`].
pub struct JournalStore<S: RecordStore> {
    storage: S,
    entries: Vec<Entry>,
    initialized: bool,
}

impl<S: RecordStore> JournalStore<S> {
    /// Create a store over the given record storage. Call
    /// [`initialize`](JournalStore::initialize) before use.
    pub fn new(storage: S) -> Self {
        JournalStore {
            storage,
            entries: Vec::new(),
            initialized: false,
        }
    }

    /// Load the durable snapshot, falling back to the seed dataset when no
    /// durable journal state exists yet.
    ///
    /// A non-empty seed is adopted as the initial snapshot and persisted
    /// immediately, so it is consulted at most once per storage location;
    /// any durable state after that takes precedence over the seed forever.
    /// Idempotent: repeated calls return the existing state.
    ///
    /// Returns the number of entries after initialization.
    pub fn initialize(&mut self, seed: Option<SeedDataset>) -> Result<usize> {
        if self.initialized {
            return Ok(self.entries.len());
        }

        let mut durable_state_exists = false;

        if let Some(raw) = self.storage.read(JOURNAL_KEY) {
            match serde_json::from_str::<Vec<Entry>>(&raw) {
                Ok(entries) => {
                    debug!(count = entries.len(), "loaded durable journal snapshot");
                    self.entries = entries;
                    durable_state_exists = true;
                }
                Err(e) => {
                    // Availability over integrity: a corrupt snapshot is
                    // treated as absent, which also re-opens seed adoption.
                    warn!(error = %e, "treating corrupt journal record as absent");
                }
            }
        }

        if !durable_state_exists {
            if let Some(seed) = seed {
                if !seed.is_empty() {
                    self.entries = seed.into_entries();
                    debug!(count = self.entries.len(), "adopted seed dataset");
                    if let Err(e) = self.persist() {
                        warn!(error = %e, "could not persist adopted seed");
                    }
                }
            }
        }

        self.initialized = true;
        Ok(self.entries.len())
    }

    /// Release text into the journal as a new immutable entry.
    ///
    /// The text is trimmed; empty-after-trim text is rejected with
    /// [`VentError::EmptyEntry`] and no state change. Identical rapid
    /// submissions are NOT deduplicated: each call creates a distinct entry.
    ///
    /// On success returns the new total count. If the durable write fails
    /// the entry is still appended in memory and the failure is reported as
    /// [`VentError::Persistence`].
    pub fn append(&mut self, text: &str, now: DateTime<Utc>) -> Result<usize> {
        let entry = Entry::release(text, now)?;

        self.entries.push(entry);
        let count = self.entries.len();
        debug!(count, "released entry into journal");

        if let Err(e) = self.persist() {
            warn!(error = %e, "journal append not durable");
            return Err(e);
        }

        Ok(count)
    }

    /// Current number of entries; monotonic non-decreasing.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Read-only view of the full ordered entry sequence.
    pub fn snapshot(&self) -> &[Entry] {
        &self.entries
    }

    /// Render the full history as the export document.
    ///
    /// Returns [`VentError::EmptyJournal`] when there are no entries.
    pub fn export_all(&self, now: DateTime<Utc>) -> Result<ExportDocument> {
        export::render(&self.entries, now)
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string(&self.entries)
            .map_err(|e| VentError::Persistence(e.to_string()))?;
        self.storage.write(JOURNAL_KEY, &serialized)
    }
}
