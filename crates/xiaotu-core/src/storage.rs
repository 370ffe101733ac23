//! Key-value persistence seam.
//!
//! Stores hold one JSON document per named slot. The core never decides where
//! slots live; `xiaotu-lib` provides a file-backed implementation and tests
//! use [`MemoryStorage`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Durable string slots keyed by name.
pub trait KeyValueStorage: Send + Sync {
    /// Read a slot. `Ok(None)` means the slot was never written.
    fn load(&self, key: &str) -> Result<Option<String>, String>;

    /// Replace a slot's contents.
    fn save(&self, key: &str, value: &str) -> Result<(), String>;
}

/// In-memory slots. Clones share the same backing map, so a test can keep a
/// handle while a store owns another.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot without counting it as a write.
    #[cfg(test)]
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Number of successful [`KeyValueStorage::save`] calls so far.
    #[cfg(test)]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current raw contents of a slot.
    #[cfg(test)]
    pub fn slot(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, String> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| format!("memory storage poisoned: {e}"))?;
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| format!("memory storage poisoned: {e}"))?;
        slots.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Storage that refuses every operation.
#[cfg(test)]
#[derive(Clone, Copy, Default)]
pub struct FailingStorage;

#[cfg(test)]
impl KeyValueStorage for FailingStorage {
    fn load(&self, key: &str) -> Result<Option<String>, String> {
        Err(format!("slot {key} unavailable"))
    }

    fn save(&self, key: &str, _value: &str) -> Result<(), String> {
        Err(format!("slot {key} is read-only"))
    }
}
