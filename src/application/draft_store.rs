//! Draft store - the single unsent buffer with debounced autosave

use crate::error::Result;
use crate::infrastructure::{RecordStore, DRAFT_KEY};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftRecord {
    draft: String,
    last_saved: DateTime<Utc>,
}

/// Holds the one in-progress, unsent text buffer and debounces its
/// persistence so a typing burst produces a single durable write.
///
/// Every [`set_text`](DraftStore::set_text) restarts the quiet-interval
/// countdown; the flush happens only once typing pauses, driven by explicit
/// [`poll`](DraftStore::poll) calls from the single cooperative thread of
/// control. This is a debounce, not a throttle.
///
/// State machine: `Idle -> Editing` on the first edit, back to `Idle` once
/// the quiet-interval flush completes; [`clear`](DraftStore::clear) forces
/// `Idle` from any state with no pending deadline.
pub struct DraftStore<S: RecordStore> {
    storage: S,
    text: String,
    last_saved: Option<DateTime<Utc>>,
    quiet_interval: Duration,
    deadline: Option<DateTime<Utc>>,
    auto_saving: bool,
}

impl<S: RecordStore> DraftStore<S> {
    pub fn new(storage: S, quiet_interval: Duration) -> Self {
        DraftStore {
            storage,
            text: String::new(),
            last_saved: None,
            quiet_interval,
            deadline: None,
            auto_saving: false,
        }
    }

    /// Restore the draft from durable storage, if a record exists.
    ///
    /// Absence is not an error; a malformed record is treated as absent.
    pub fn load_draft(&mut self) {
        let Some(raw) = self.storage.read(DRAFT_KEY) else {
            return;
        };

        match serde_json::from_str::<DraftRecord>(&raw) {
            Ok(record) => {
                debug!(last_saved = %record.last_saved, "restored draft");
                self.text = record.draft;
                self.last_saved = Some(record.last_saved);
            }
            Err(e) => {
                warn!(error = %e, "treating corrupt draft record as absent");
            }
        }
    }

    /// Replace the draft text and restart the autosave countdown.
    ///
    /// Any pending flush is cancelled and a new one is scheduled for
    /// `now + quiet_interval`. Whitespace-only text cancels the pending
    /// flush without scheduling a new one.
    pub fn set_text(&mut self, text: &str, now: DateTime<Utc>) {
        self.text = text.to_string();

        if self.text.trim().is_empty() {
            self.deadline = None;
            self.auto_saving = false;
        } else {
            self.deadline = Some(now + self.quiet_interval);
            self.auto_saving = true;
        }
    }

    /// Cooperative tick: flush if the quiet interval has elapsed since the
    /// last edit. Returns whether a flush happened.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Result<bool> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.flush(now)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Persist the draft immediately, regardless of any pending deadline.
    ///
    /// Used at process exit so a one-shot invocation never loses the draft.
    /// Best-effort: on failure the in-memory draft stays authoritative and
    /// the store returns to `Idle`.
    pub fn flush(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.deadline = None;
        self.auto_saving = false;

        let record = DraftRecord {
            draft: self.text.clone(),
            last_saved: now,
        };
        let serialized = serde_json::to_string(&record)
            .map_err(|e| crate::error::VentError::Persistence(e.to_string()))?;

        if let Err(e) = self.storage.write(DRAFT_KEY, &serialized) {
            warn!(error = %e, "draft autosave not durable");
            return Err(e);
        }

        debug!("draft flushed");
        self.last_saved = Some(now);
        Ok(())
    }

    /// Empty the draft, cancel any pending flush and delete the durable
    /// record, so a restart after release does not resurrect stale text.
    pub fn clear(&mut self) -> Result<()> {
        self.text.clear();
        self.deadline = None;
        self.auto_saving = false;
        self.storage.delete(DRAFT_KEY)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    /// Observable "Saving..." signal: true while a flush is pending or in
    /// progress. Purely presentational, no correctness role.
    pub fn is_auto_saving(&self) -> bool {
        self.auto_saving
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VentError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory record store that counts writes, for debounce assertions.
    #[derive(Clone, Default)]
    struct MemoryStore {
        records: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<RefCell<usize>>,
    }

    impl RecordStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.records.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<()> {
            *self.writes.borrow_mut() += 1;
            self.records
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn delete(&self, key: &str) -> Result<()> {
            self.records.borrow_mut().remove(key);
            Ok(())
        }
    }

    impl MemoryStore {
        fn write_count(&self) -> usize {
            *self.writes.borrow()
        }

        fn draft_record(&self) -> Option<String> {
            self.read(DRAFT_KEY)
        }
    }

    fn t0() -> DateTime<Utc> {
        "2025-01-17T10:00:00Z".parse().unwrap()
    }

    fn secs(n: i64) -> Duration {
        Duration::seconds(n)
    }

    fn store() -> (MemoryStore, DraftStore<MemoryStore>) {
        let memory = MemoryStore::default();
        let draft = DraftStore::new(memory.clone(), secs(2));
        (memory, draft)
    }

    #[test]
    fn test_burst_of_edits_produces_single_write_with_final_text() {
        let (memory, mut draft) = store();

        draft.set_text("a", t0());
        draft.poll(t0() + secs(1)).unwrap();
        draft.set_text("ab", t0() + secs(1));
        draft.poll(t0() + secs(2)).unwrap();
        draft.set_text("abc", t0() + secs(2));

        // Quiet interval has not elapsed since the last edit.
        assert!(!draft.poll(t0() + secs(3)).unwrap());
        assert_eq!(memory.write_count(), 0);

        // It has now.
        assert!(draft.poll(t0() + secs(4)).unwrap());
        assert_eq!(memory.write_count(), 1);
        assert!(memory.draft_record().unwrap().contains("abc"));
    }

    #[test]
    fn test_each_edit_restarts_the_countdown() {
        let (memory, mut draft) = store();

        draft.set_text("hello", t0());
        // One second in, another edit: deadline moves to t0+1+2.
        draft.set_text("hello again", t0() + secs(1));

        assert!(!draft.poll(t0() + secs(2)).unwrap());
        assert!(draft.poll(t0() + secs(3)).unwrap());
        assert_eq!(memory.write_count(), 1);
    }

    #[test]
    fn test_auto_saving_signal_spans_pending_flush() {
        let (_memory, mut draft) = store();

        assert!(!draft.is_auto_saving());
        draft.set_text("typing", t0());
        assert!(draft.is_auto_saving());

        draft.poll(t0() + secs(2)).unwrap();
        assert!(!draft.is_auto_saving());
    }

    #[test]
    fn test_whitespace_only_text_does_not_schedule_flush() {
        let (memory, mut draft) = store();

        draft.set_text("   ", t0());
        assert!(!draft.is_auto_saving());
        assert!(!draft.poll(t0() + secs(10)).unwrap());
        assert_eq!(memory.write_count(), 0);
    }

    #[test]
    fn test_clearing_text_cancels_pending_flush() {
        let (memory, mut draft) = store();

        draft.set_text("something", t0());
        draft.set_text("", t0() + secs(1));

        assert!(!draft.poll(t0() + secs(10)).unwrap());
        assert_eq!(memory.write_count(), 0);
    }

    #[test]
    fn test_clear_before_quiet_interval_leaves_no_durable_record() {
        let (memory, mut draft) = store();

        draft.set_text("abc", t0());
        draft.clear().unwrap();

        assert!(!draft.poll(t0() + secs(10)).unwrap());
        assert!(memory.draft_record().is_none());

        // A fresh store over the same records restores an empty draft.
        let mut reloaded = DraftStore::new(memory, secs(2));
        reloaded.load_draft();
        assert_eq!(reloaded.text(), "");
    }

    #[test]
    fn test_clear_deletes_previously_flushed_record() {
        let (memory, mut draft) = store();

        draft.set_text("abc", t0());
        draft.poll(t0() + secs(2)).unwrap();
        assert!(memory.draft_record().is_some());

        draft.clear().unwrap();
        assert!(memory.draft_record().is_none());
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn test_draft_survives_restart() {
        let (memory, mut draft) = store();

        draft.set_text("half-written thought", t0());
        draft.poll(t0() + secs(2)).unwrap();

        let mut reloaded = DraftStore::new(memory, secs(2));
        reloaded.load_draft();
        assert_eq!(reloaded.text(), "half-written thought");
        assert_eq!(reloaded.last_saved(), Some(t0() + secs(2)));
    }

    #[test]
    fn test_load_draft_with_corrupt_record_starts_empty() {
        let memory = MemoryStore::default();
        memory.write(DRAFT_KEY, "{broken").unwrap();

        let mut draft = DraftStore::new(memory, secs(2));
        draft.load_draft();
        assert_eq!(draft.text(), "");
        assert_eq!(draft.last_saved(), None);
    }

    #[test]
    fn test_flush_records_last_saved_instant() {
        let (_memory, mut draft) = store();

        draft.set_text("note", t0());
        draft.flush(t0() + secs(1)).unwrap();
        assert_eq!(draft.last_saved(), Some(t0() + secs(1)));
        assert!(!draft.is_auto_saving());
    }

    /// Record store that refuses writes, for the soft-failure contract.
    struct FailingStore;

    impl RecordStore for FailingStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(VentError::Persistence("quota exceeded".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_flush_keeps_text_and_returns_to_idle() {
        let mut draft = DraftStore::new(FailingStore, secs(2));

        draft.set_text("important words", t0());
        let result = draft.flush(t0());
        assert!(matches!(result, Err(VentError::Persistence(_))));

        assert_eq!(draft.text(), "important words");
        assert!(!draft.is_auto_saving());
    }
}
