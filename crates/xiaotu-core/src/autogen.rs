//! Best-effort repair of Zhuyin gaps from the correction set.
//!
//! This is a patch table, not a converter: glyphs missing from both the
//! combined table and the correction set stay missing.

use std::collections::BTreeMap;

use tracing::debug;

use crate::coverage::missing_chars;
use crate::overrides::CustomZhuyinStore;
use crate::tables::common_correction;
use crate::types::AutoMapping;

/// Resolve what the correction set can for `text` and commit the hits into
/// the override store (one persistence write when anything resolved).
///
/// Resolved glyphs stop being missing, so calling this again on the same
/// text reports `generated_count == 0`.
pub fn auto_generate(text: &str, store: &mut CustomZhuyinStore) -> AutoMapping {
    let missing = missing_chars(text, store);
    let mapping: BTreeMap<char, String> = missing
        .iter()
        .filter_map(|&c| common_correction(c).map(|z| (c, z.to_string())))
        .collect();

    let generated_count = store.merge_and_persist(
        mapping.iter().map(|(c, z)| (*c, z.clone())),
    );

    debug!(
        "auto-generated {} of {} missing zhuyin",
        generated_count,
        missing.len()
    );

    AutoMapping {
        generated_count,
        total_missing: missing.len(),
        mapping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::check_coverage;
    use crate::storage::MemoryStorage;

    #[test]
    fn empty_text_generates_nothing() {
        let mut store = CustomZhuyinStore::in_memory();
        assert_eq!(auto_generate("", &mut store), AutoMapping::default());
    }

    #[test]
    fn resolves_known_corrections() {
        let mut store = CustomZhuyinStore::in_memory();
        let result = auto_generate("終於來了嗎", &mut store);
        assert_eq!(result.generated_count, 2);
        assert_eq!(result.total_missing, 2);
        assert_eq!(result.mapping[&'於'], "ㄩˊ");
        assert_eq!(result.mapping[&'嗎'], "ㄇㄚ˙");
        assert_eq!(store.get('於'), Some("ㄩˊ"));
    }

    #[test]
    fn unknown_glyphs_stay_missing() {
        let mut store = CustomZhuyinStore::in_memory();
        let result = auto_generate("龍於", &mut store);
        assert_eq!(result.generated_count, 1);
        assert_eq!(result.total_missing, 2);
        assert!(!result.mapping.contains_key(&'龍'));
        assert_eq!(check_coverage("龍", &store).missing_chars, vec!['龍']);
    }

    #[test]
    fn resolved_glyphs_stop_being_missing() {
        let mut store = CustomZhuyinStore::in_memory();
        auto_generate("於", &mut store);
        assert!(check_coverage("終於到了", &store).has_full_coverage);
    }

    #[test]
    fn repeat_calls_trend_to_zero() {
        let mut store = CustomZhuyinStore::in_memory();
        assert_eq!(auto_generate("於呢龍", &mut store).generated_count, 2);
        let second = auto_generate("於呢龍", &mut store);
        assert_eq!(second.generated_count, 0);
        assert_eq!(second.total_missing, 1);
        assert!(second.mapping.is_empty());
    }

    #[test]
    fn one_write_per_resolving_call() {
        let storage = MemoryStorage::new();
        let mut store = CustomZhuyinStore::load(storage.clone());
        auto_generate("於呢嗎啊", &mut store);
        assert_eq!(storage.writes(), 1);
        auto_generate("於呢嗎啊", &mut store);
        auto_generate("龍", &mut store);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn commits_survive_reload() {
        let storage = MemoryStorage::new();
        auto_generate("啊", &mut CustomZhuyinStore::load(storage.clone()));
        let reloaded = CustomZhuyinStore::load(storage);
        assert!(check_coverage("啊", &reloaded).has_full_coverage);
    }
}
