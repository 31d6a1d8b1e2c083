//! Application layer - Use cases and the two core stores

pub mod compose;
pub mod draft_service;
pub mod draft_store;
pub mod export_feelings;
pub mod init;
pub mod journal_store;
pub mod list_history;
pub mod manage_config;
pub mod release;
pub mod status;

pub use compose::ComposeService;
pub use draft_service::{DraftService, DraftStatus};
pub use draft_store::DraftStore;
pub use export_feelings::ExportService;
pub use journal_store::JournalStore;
pub use list_history::HistoryService;
pub use manage_config::ConfigService;
pub use release::{ReleaseOutcome, ReleaseService};
pub use status::{Status, StatusService};
