//! vent - Terminal venting journal
//!
//! A private place to draft a difficult thought, release it into a
//! permanent append-only journal, and export the full history as a
//! plain-text document. Drafts autosave after a quiet period of
//! inactivity; released entries are immutable.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::VentError;
