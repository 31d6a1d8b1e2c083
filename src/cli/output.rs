//! Output formatting utilities

use crate::application::Status;
use crate::domain::Entry;
use chrono::Local;

const RELEASE_CAPTIONS: [&str; 5] = [
    "Your thoughts have transformed into stardust",
    "Released into the universe, free and light",
    "You let go beautifully. You're lighter now",
    "Those words are now floating among the stars",
    "Peace flows where worry once lived",
];

/// Caption shown after the Nth successful release.
pub fn release_caption(count: usize) -> &'static str {
    RELEASE_CAPTIONS[(count.max(1) - 1) % RELEASE_CAPTIONS.len()]
}

/// Healing milestone label for the current journal size.
pub fn milestone(count: usize) -> &'static str {
    match count {
        0..=9 => "Early days of healing",
        10..=24 => "Building strength",
        25..=49 => "Finding your peace",
        _ => "Transformed",
    }
}

/// Progress line for the current journal size.
pub fn progress_caption(count: usize) -> String {
    match count {
        0 => "Start releasing your feelings...".to_string(),
        1 => "1 feeling released. You're taking steps toward healing.".to_string(),
        n => format!("{} feelings released. Each one brings you closer to peace.", n),
    }
}

/// Format the released history for display
pub fn format_history(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No feelings released yet".to_string();
    }

    let mut output = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let date = entry.timestamp.with_timezone(&Local).format("%d-%m-%Y %H:%M");
        output.push_str(&format!("#{:<3} {}  {}\n", index + 1, date, entry.text));
    }
    output
}

/// Format the journal/draft status for display
pub fn format_status(status: &Status) -> String {
    let mut output = String::new();
    output.push_str(&format!("Feelings released: {}\n", status.count));
    output.push_str(&format!("{}\n", progress_caption(status.count)));
    output.push_str(&format!("Milestone: {}\n", milestone(status.count)));

    if status.draft.text.is_empty() {
        output.push_str("Draft: empty\n");
    } else {
        output.push_str(&format!(
            "Draft: {} characters",
            status.draft.text.chars().count()
        ));
        if let Some(saved) = status.draft.last_saved {
            output.push_str(&format!(
                " (saved {})",
                saved.with_timezone(&Local).format("%d-%m-%Y %H:%M")
            ));
        }
        output.push('\n');
    }

    output
}
