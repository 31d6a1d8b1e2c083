//! Seed dataset parsing

use crate::domain::Entry;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// A pre-existing collection of entries used to initialize an empty journal.
///
/// The seed document has the shape
/// `{"ventingEntries": [{"id": ..., "text": ..., "timestamp": ...}, ...]}`.
/// It is consulted only when the durable journal record is absent; once any
/// durable journal state exists the seed is ignored permanently.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDataset {
    #[serde(default)]
    pub venting_entries: Vec<SeedEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    #[allow(dead_code)]
    pub id: Option<u64>,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl SeedDataset {
    /// Load a seed dataset from a JSON file.
    ///
    /// A missing or malformed file is not an error: the seed is optional and
    /// the journal simply starts empty. Malformed files log a warning.
    pub fn load(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;

        match serde_json::from_str::<SeedDataset>(&contents) {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed seed dataset");
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.venting_entries.is_empty()
    }

    /// Convert seed entries to released journal entries, preserving order.
    /// Seed text is adopted verbatim.
    pub fn into_entries(self) -> Vec<Entry> {
        self.venting_entries
            .into_iter()
            .map(|e| Entry::adopted(e.text, e.timestamp))
            .collect()
    }
}
