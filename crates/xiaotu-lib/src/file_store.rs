//! File-backed key-value slots: one `<key>.json` file per slot.
//!
//! Writes go to a `.partial` sibling first and are renamed into place, so a
//! crash mid-write leaves the previous contents intact.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use xiaotu_core::storage::KeyValueStorage;

#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, String> {
        let path = self.slot_path(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("failed to read {}: {e}", path.display())),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| format!("failed to create {}: {e}", self.dir.display()))?;

        let dest = self.slot_path(key);
        let partial = self.dir.join(format!("{key}.json.partial"));
        std::fs::write(&partial, value)
            .map_err(|e| format!("failed to write {}: {e}", partial.display()))?;
        std::fs::rename(&partial, &dest)
            .map_err(|e| format!("failed to finalize {}: {e}", dest.display()))?;

        debug!("saved slot {key} ({} bytes)", value.len());
        Ok(())
    }
}
