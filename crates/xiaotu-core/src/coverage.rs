//! Zhuyin coverage checking.

use crate::overrides::CustomZhuyinStore;
use crate::tables::is_cjk;
use crate::types::CoverageReport;

/// Report which CJK glyphs in `text` have no entry in the combined Zhuyin
/// table. Non-CJK code points are ignored. Never mutates the store.
pub fn check_coverage(text: &str, store: &CustomZhuyinStore) -> CoverageReport {
    CoverageReport::from_missing(missing_chars(text, store))
}

/// Missing glyphs in first-occurrence order, deduplicated.
pub fn missing_chars(text: &str, store: &CustomZhuyinStore) -> Vec<char> {
    let lookup = store.lookup();
    let mut missing = Vec::new();
    for c in text.chars() {
        if is_cjk(c) && !lookup.contains(c) && !missing.contains(&c) {
            missing.push(c);
        }
    }
    missing
}
