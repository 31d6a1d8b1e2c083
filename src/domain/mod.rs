//! Domain layer - Entries, seed data and export rendering

pub mod entry;
pub mod export;
pub mod seed;

pub use entry::Entry;
pub use export::ExportDocument;
pub use seed::SeedDataset;
