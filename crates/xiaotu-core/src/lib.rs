//! xiaotu-core — Phonetic tables, coverage checking and annotation formatting.
//!
//! No async runtime, no network. Persistence goes through the
//! [`storage::KeyValueStorage`] seam so callers choose where state lives.

pub mod autogen;
pub mod coverage;
mod data;
pub mod format;
pub mod overrides;
pub mod settings;
pub mod storage;
pub mod story;
pub mod tables;
pub mod types;
pub mod voices;
