//! Released journal entries

use crate::error::{Result, VentError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable released thought.
///
/// Entries are created through [`Entry::release`] and never mutated or
/// deleted afterwards; the journal they live in is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub released: bool,
}

impl Entry {
    /// Create a released entry from author-supplied text.
    ///
    /// Leading and trailing whitespace is trimmed at submission time;
    /// text that is empty after trimming is rejected.
    pub fn release(text: &str, now: DateTime<Utc>) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(VentError::EmptyEntry);
        }

        Ok(Entry {
            text: trimmed.to_string(),
            timestamp: now,
            released: true,
        })
    }

    /// Create an already-released entry, e.g. when adopting a seed dataset.
    /// Seed text is taken verbatim.
    pub fn adopted(text: String, timestamp: DateTime<Utc>) -> Self {
        Entry {
            text,
            timestamp,
            released: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_trims_text() {
        let now = Utc::now();
        let entry = Entry::release("  I feel better today  \n", now).unwrap();
        assert_eq!(entry.text, "I feel better today");
        assert_eq!(entry.timestamp, now);
        assert!(entry.released);
    }

    #[test]
    fn test_release_rejects_empty() {
        let result = Entry::release("", Utc::now());
        assert!(matches!(result, Err(VentError::EmptyEntry)));
    }

    #[test]
    fn test_release_rejects_whitespace_only() {
        let result = Entry::release("   \n\t ", Utc::now());
        assert!(matches!(result, Err(VentError::EmptyEntry)));
    }

    #[test]
    fn test_entry_serializes_with_released_flag() {
        let now = Utc::now();
        let entry = Entry::release("hello", now).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"released\":true"));
        assert!(json.contains("\"text\":\"hello\""));
    }

    #[test]
    fn test_entry_round_trips_through_json() {
        let entry = Entry::release("a thought", Utc::now()).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
