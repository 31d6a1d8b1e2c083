//! Error types for vent

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the vent application
#[derive(Debug, Error)]
pub enum VentError {
    #[error("Not a vent directory: {0}")]
    NotVentDirectory(PathBuf),

    #[error("Nothing to release: the entry is empty")]
    EmptyEntry,

    #[error("No feelings to export: the journal is empty")]
    EmptyJournal,

    #[error("Could not persist to durable storage: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VentError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VentError::NotVentDirectory(_) => 2,
            VentError::EmptyEntry => 3,
            VentError::EmptyJournal => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            VentError::NotVentDirectory(path) => {
                format!(
                    "Not a vent directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'vent init' in this directory to create a new journal\n\
                    • Navigate to an existing vent directory\n\
                    • Set VENT_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            VentError::EmptyEntry => "Nothing to release: the entry is empty\n\n\
                Suggestions:\n\
                • Write something first, then release it\n\
                • Build up a draft with 'vent draft \"...\"' or 'vent compose'\n\
                • Release the current draft with a plain 'vent release'"
                .to_string(),
            VentError::EmptyJournal => "No feelings to export: the journal is empty\n\n\
                Suggestions:\n\
                • Release a feeling first: vent release \"...\"\n\
                • Check the journal size with 'vent status'"
                .to_string(),
            VentError::Persistence(msg) => {
                format!(
                    "Could not persist to durable storage: {}\n\n\
                    Your entry was recorded for this session, but it may not\n\
                    survive a restart. Check that the .vent directory is\n\
                    writable and that the disk is not full.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using VentError
pub type Result<T> = std::result::Result<T, VentError>;
