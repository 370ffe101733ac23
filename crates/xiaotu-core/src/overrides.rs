//! Custom Zhuyin overrides layered over the static table.
//!
//! The combined view is always `{...static, ...custom}`: a custom entry
//! shadows a static one with the same glyph, never the reverse. Every mutation
//! re-serializes the whole override table and writes it once.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::storage::{KeyValueStorage, MemoryStorage};
use crate::tables;

/// Storage slot holding the override table as a JSON object.
pub const CUSTOM_ZHUYIN_KEY: &str = "customZhuyinMap";

pub struct CustomZhuyinStore {
    entries: BTreeMap<char, String>,
    storage: Box<dyn KeyValueStorage>,
}

impl CustomZhuyinStore {
    /// Empty store backed by throwaway memory.
    pub fn in_memory() -> Self {
        Self {
            entries: BTreeMap::new(),
            storage: Box::new(MemoryStorage::new()),
        }
    }

    /// Load the persisted table. Unreadable or malformed state is logged and
    /// replaced with an empty table.
    pub fn load(storage: impl KeyValueStorage + 'static) -> Self {
        let entries = match storage.load(CUSTOM_ZHUYIN_KEY) {
            Ok(Some(raw)) => parse_entries(&raw),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                warn!("failed to load custom zhuyin mappings: {e}");
                BTreeMap::new()
            }
        };
        debug!("custom zhuyin store loaded ({} entries)", entries.len());
        Self {
            entries,
            storage: Box::new(storage),
        }
    }

    /// The override for `c`, ignoring the static table.
    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    /// Add or replace one override and persist.
    pub fn set(&mut self, c: char, zhuyin: impl Into<String>) {
        self.entries.insert(c, zhuyin.into());
        self.persist();
    }

    /// Add several overrides with a single persistence write.
    ///
    /// Returns how many entries were merged. Nothing is written when the
    /// iterator is empty.
    pub fn merge_and_persist<I, S>(&mut self, mappings: I) -> usize
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut merged = 0;
        for (c, zhuyin) in mappings {
            self.entries.insert(c, zhuyin.into());
            merged += 1;
        }
        if merged > 0 {
            self.persist();
        }
        merged
    }

    pub fn entries(&self) -> &BTreeMap<char, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combined static + custom lookup. Checker and formatter both read
    /// through this, so they can never disagree about coverage.
    pub fn lookup(&self) -> ZhuyinLookup<'_> {
        ZhuyinLookup { custom: self }
    }

    fn persist(&self) {
        let snapshot: BTreeMap<String, &str> = self
            .entries
            .iter()
            .map(|(c, z)| (c.to_string(), z.as_str()))
            .collect();
        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize custom zhuyin mappings: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.save(CUSTOM_ZHUYIN_KEY, &json) {
            warn!("failed to save custom zhuyin mappings: {e}");
        }
    }
}

impl Default for CustomZhuyinStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Parse the persisted JSON object, keeping only single-glyph keys.
fn parse_entries(raw: &str) -> BTreeMap<char, String> {
    let parsed: BTreeMap<String, String> = match serde_json::from_str(raw) {
        Ok(map) => map,
        Err(e) => {
            warn!("failed to parse custom zhuyin mappings: {e}");
            return BTreeMap::new();
        }
    };
    parsed
        .into_iter()
        .filter_map(|(key, zhuyin)| {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !zhuyin.is_empty() => Some((c, zhuyin)),
                _ => {
                    warn!("skipping malformed custom zhuyin entry {key:?}");
                    None
                }
            }
        })
        .collect()
}

/// Read-only view of the combined Zhuyin table.
#[derive(Clone, Copy)]
pub struct ZhuyinLookup<'a> {
    custom: &'a CustomZhuyinStore,
}

impl<'a> ZhuyinLookup<'a> {
    pub fn get(&self, c: char) -> Option<&'a str> {
        self.custom.get(c).or_else(|| tables::static_zhuyin(c))
    }

    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FailingStorage;

    #[test]
    fn empty_store_falls_through_to_static() {
        let store = CustomZhuyinStore::in_memory();
        assert_eq!(store.lookup().get('小'), Some("ㄒㄧㄠˇ"));
        assert_eq!(store.lookup().get('於'), None);
    }

    #[test]
    fn custom_shadows_static() {
        let mut store = CustomZhuyinStore::in_memory();
        store.set('小', "ㄒㄧㄠ");
        assert_eq!(store.lookup().get('小'), Some("ㄒㄧㄠ"));
        assert_eq!(tables::static_zhuyin('小'), Some("ㄒㄧㄠˇ"));
    }

    #[test]
    fn set_persists_full_table() {
        let storage = MemoryStorage::new();
        let mut store = CustomZhuyinStore::load(storage.clone());
        store.set('於', "ㄩˊ");
        store.set('呢', "ㄋㄜ˙");
        assert_eq!(storage.writes(), 2);
        let saved: BTreeMap<String, String> =
            serde_json::from_str(&storage.slot(CUSTOM_ZHUYIN_KEY).unwrap()).unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved["於"], "ㄩˊ");
    }

    #[test]
    fn merge_writes_once() {
        let storage = MemoryStorage::new();
        let mut store = CustomZhuyinStore::load(storage.clone());
        let merged = store.merge_and_persist([('於', "ㄩˊ"), ('嗎', "ㄇㄚ˙")]);
        assert_eq!(merged, 2);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn empty_merge_does_not_write() {
        let storage = MemoryStorage::new();
        let mut store = CustomZhuyinStore::load(storage.clone());
        assert_eq!(store.merge_and_persist(Vec::<(char, String)>::new()), 0);
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn reload_round_trips() {
        let storage = MemoryStorage::new();
        CustomZhuyinStore::load(storage.clone()).set('啊', "ㄚ˙");
        let reloaded = CustomZhuyinStore::load(storage);
        assert_eq!(reloaded.get('啊'), Some("ㄚ˙"));
    }

    #[test]
    fn malformed_blob_loads_empty() {
        let storage = MemoryStorage::new().with_slot(CUSTOM_ZHUYIN_KEY, "{not json");
        assert!(CustomZhuyinStore::load(storage).is_empty());
    }

    #[test]
    fn multi_glyph_keys_are_dropped() {
        let storage = MemoryStorage::new()
            .with_slot(CUSTOM_ZHUYIN_KEY, r#"{"於":"ㄩˊ","森林":"ㄙㄣ","嗎":""}"#);
        let store = CustomZhuyinStore::load(storage);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get('於'), Some("ㄩˊ"));
    }

    #[test]
    fn failing_storage_is_recovered() {
        let mut store = CustomZhuyinStore::load(FailingStorage);
        assert!(store.is_empty());
        store.set('於', "ㄩˊ");
        assert_eq!(store.lookup().get('於'), Some("ㄩˊ"));
    }
}
