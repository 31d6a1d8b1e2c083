//! Interactive compose use case - line-by-line drafting with autosave

use crate::application::DraftStore;
use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use chrono::{DateTime, Utc};
use std::io::{BufRead, Write};

/// Service for building up the draft interactively.
///
/// Each input line replaces the draft with the accumulated text and
/// restarts the autosave countdown; a pause before the next line lets the
/// quiet interval elapse, so the poll at the start of the next iteration
/// flushes and reports `Saving...`. The draft is always flushed at EOF.
pub struct ComposeService {
    storage: FileStore,
}

impl ComposeService {
    pub fn new(storage: FileStore) -> Self {
        ComposeService { storage }
    }

    /// Run the compose loop over `input`, writing progress to `output`.
    /// `now` supplies the current instant, once per event.
    ///
    /// Returns the final draft text.
    pub fn execute<R, W, F>(&self, input: R, output: &mut W, mut now: F) -> Result<String>
    where
        R: BufRead,
        W: Write,
        F: FnMut() -> DateTime<Utc>,
    {
        let config = Config::load_from_dir(&self.storage.root)?;
        let mut draft = DraftStore::new(self.storage.clone(), config.quiet_interval());
        draft.load_draft();

        if !draft.text().is_empty() {
            writeln!(output, "Continuing your saved draft.")?;
        }

        let mut buffer = draft.text().to_string();

        for line in input.lines() {
            let line = line?;
            let instant = now();

            if draft.is_auto_saving() && draft.poll(instant)? {
                writeln!(output, "Saving... saved.")?;
            }

            if !buffer.is_empty() {
                buffer.push('\n');
            }
            buffer.push_str(&line);
            draft.set_text(&buffer, instant);
        }

        if !draft.text().trim().is_empty() {
            draft.flush(now())?;
            writeln!(output, "Draft saved. Release it with 'vent release'.")?;
        }

        Ok(draft.text().to_string())
    }
}
