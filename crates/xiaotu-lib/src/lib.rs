//! xiaotu-lib — Story server engine.
//!
//! ElevenLabs proxy, file-backed persistence, shared state, and HTTP API.
//! Depends on xiaotu-core for the phonetic tables and text formatting.

pub mod file_store;
pub mod server;
pub mod state;
pub mod tts;

// Re-export xiaotu-core for convenience
pub use xiaotu_core;
