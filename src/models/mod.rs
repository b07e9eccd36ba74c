//! Core data models for the PTO balance engine.
//!
//! This module contains the time-off entry type and the date-ordered entry
//! index the balance walk consumes.

mod entry;
mod entry_index;

pub use entry::TimeOffEntry;
pub use entry_index::EntryIndex;
