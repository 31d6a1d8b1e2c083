//! Export document rendering

use crate::domain::Entry;
use crate::error::{Result, VentError};
use chrono::{DateTime, Local, Utc};

/// A rendered full-history export: the plain-text document plus the
/// conventional filename it should be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub filename: String,
    pub content: String,
}

/// Render every entry into the "Feelings Released" export document.
///
/// The rendering is deterministic for a given entry sequence and export
/// instant: a title line, one block per entry (1-based index, date line,
/// text), then a trailing summary with the total count and the instant the
/// export was generated.
///
/// Returns [`VentError::EmptyJournal`] when there is nothing to export; no
/// document is produced in that case.
pub fn render(entries: &[Entry], now: DateTime<Utc>) -> Result<ExportDocument> {
    if entries.is_empty() {
        return Err(VentError::EmptyJournal);
    }

    let mut content = String::new();
    content.push_str("Feelings Released\n");
    content.push_str("==================\n\n");

    for (index, entry) in entries.iter().enumerate() {
        let date = entry
            .timestamp
            .with_timezone(&Local)
            .format("%B %-d, %Y, %I:%M %p");

        content.push_str(&format!("Feeling #{}\n", index + 1));
        content.push_str(&format!("Date: {}\n", date));
        content.push_str("---\n");
        content.push_str(&format!("{}\n\n", entry.text));
        content.push_str("==================\n\n");
    }

    content.push_str(&format!("\nTotal Feelings Released: {}\n", entries.len()));
    content.push_str(&format!(
        "Generated: {}\n",
        now.with_timezone(&Local).format("%-m/%-d/%Y, %-I:%M:%S %p")
    ));

    Ok(ExportDocument {
        filename: format!("feelings_released_{}.txt", now.format("%Y-%m-%d")),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> Entry {
        Entry::release(text, Utc::now()).unwrap()
    }

    #[test]
    fn test_render_empty_journal_fails() {
        let result = render(&[], Utc::now());
        assert!(matches!(result, Err(VentError::EmptyJournal)));
    }

    #[test]
    fn test_render_single_entry() {
        let doc = render(&[entry("I feel better today")], Utc::now()).unwrap();

        assert!(doc.content.starts_with("Feelings Released\n==================\n\n"));
        assert!(doc.content.contains("Feeling #1\n"));
        assert!(doc.content.contains("Date: "));
        assert!(doc.content.contains("I feel better today\n"));
        assert!(doc.content.contains("Total Feelings Released: 1\n"));
        assert!(doc.content.contains("Generated: "));
    }

    #[test]
    fn test_render_block_count_matches_entry_count() {
        let entries: Vec<Entry> = (0..5).map(|i| entry(&format!("thought {}", i))).collect();
        let doc = render(&entries, Utc::now()).unwrap();

        let blocks = doc.content.matches("Feeling #").count();
        assert_eq!(blocks, entries.len());
        assert!(doc.content.contains("Total Feelings Released: 5\n"));
    }

    #[test]
    fn test_render_preserves_order() {
        let entries = vec![entry("first"), entry("second"), entry("third")];
        let doc = render(&entries, Utc::now()).unwrap();

        let first = doc.content.find("first").unwrap();
        let second = doc.content.find("second").unwrap();
        let third = doc.content.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_filename_uses_export_date() {
        let now = "2025-01-17T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let doc = render(&[entry("x")], now).unwrap();
        assert_eq!(doc.filename, "feelings_released_2025-01-17.txt");
    }
}
