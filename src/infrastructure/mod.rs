//! Infrastructure layer - Durable storage and configuration

pub mod config;
pub mod store;

pub use config::Config;
pub use store::{FileStore, RecordStore, DRAFT_KEY, JOURNAL_KEY};
