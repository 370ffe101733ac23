//! Read-only phonetic lookups over the curated data.
//!
//! Every table is indexed once on first use and shared for the life of the
//! process. The Pinyin table exists exactly once; anything that needs a
//! syllable comes through [`pinyin`].

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::data::{COMMON_CORRECTIONS, ENGLISH_GLOSS, PINYIN, ZHUYIN};

static PINYIN_INDEX: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| PINYIN.iter().copied().collect());
static ZHUYIN_INDEX: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| ZHUYIN.iter().copied().collect());
static CORRECTIONS_INDEX: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| COMMON_CORRECTIONS.iter().copied().collect());
static GLOSS_INDEX: LazyLock<GlossIndex> = LazyLock::new(|| GlossIndex::new(ENGLISH_GLOSS));

/// True for code points in the CJK Unified Ideographs block (U+4E00–U+9FFF).
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Pinyin syllable for a glyph, if curated.
pub fn pinyin(c: char) -> Option<&'static str> {
    PINYIN_INDEX.get(&c).copied()
}

/// Zhuyin from the static table only. Most callers want the combined view
/// from [`crate::overrides::CustomZhuyinStore::lookup`].
pub fn static_zhuyin(c: char) -> Option<&'static str> {
    ZHUYIN_INDEX.get(&c).copied()
}

/// Zhuyin from the correction set used by [`crate::autogen`].
pub fn common_correction(c: char) -> Option<&'static str> {
    CORRECTIONS_INDEX.get(&c).copied()
}

/// The shared phrase gloss index.
pub fn glosses() -> &'static GlossIndex {
    &GLOSS_INDEX
}

/// Phrase → English gloss, keyed by whole phrases rather than glyphs.
#[derive(Debug)]
pub struct GlossIndex {
    entries: HashMap<&'static str, &'static str>,
    /// Longest key, in chars. Bounds the longest-match scan.
    max_phrase_len: usize,
}

impl GlossIndex {
    fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        let entries: HashMap<_, _> = pairs.iter().copied().collect();
        let max_phrase_len = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Self {
            entries,
            max_phrase_len,
        }
    }

    fn get(&self, phrase: &str) -> Option<&'static str> {
        self.entries.get(phrase).copied()
    }

    /// Longest gloss phrase that starts at `chars[start]`.
    ///
    /// Returns the phrase length in chars and its gloss. Single glyphs never
    /// match; the gloss table is keyed by words.
    pub fn longest_match(&self, chars: &[char], start: usize) -> Option<(usize, &'static str)> {
        let available = chars.len().saturating_sub(start);
        let upper = self.max_phrase_len.min(available);
        let mut phrase = String::with_capacity(upper * 3);
        for len in (2..=upper).rev() {
            phrase.clear();
            phrase.extend(&chars[start..start + len]);
            if let Some(gloss) = self.get(&phrase) {
                return Some((len, gloss));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bopomofo letters (U+3105–U+312F) plus the four tone marks.
    fn is_zhuyin_symbol(c: char) -> bool {
        ('\u{3105}'..='\u{312f}').contains(&c) || matches!(c, 'ˊ' | 'ˇ' | 'ˋ' | '˙')
    }

    #[test]
    fn cjk_range_bounds() {
        assert!(is_cjk('\u{4e00}'));
        assert!(is_cjk('\u{9fff}'));
        assert!(is_cjk('兔'));
        assert!(!is_cjk('\u{4dff}'));
        assert!(!is_cjk('\u{a000}'));
        assert!(!is_cjk('。'));
        assert!(!is_cjk('a'));
        assert!(!is_cjk('ㄒ'));
    }

    #[test]
    fn known_pinyin() {
        assert_eq!(pinyin('小'), Some("xiǎo"));
        assert_eq!(pinyin('兔'), Some("tù"));
        assert_eq!(pinyin('子'), Some("zi"));
        assert_eq!(pinyin('x'), None);
    }

    #[test]
    fn known_zhuyin() {
        assert_eq!(static_zhuyin('小'), Some("ㄒㄧㄠˇ"));
        assert_eq!(static_zhuyin('一'), Some("ㄧ"));
        assert_eq!(static_zhuyin('於'), None);
    }

    #[test]
    fn zhuyin_entries_use_bopomofo_alphabet() {
        for (c, zhuyin) in ZHUYIN.iter().chain(COMMON_CORRECTIONS) {
            let units = zhuyin.chars().count();
            assert!((1..=4).contains(&units), "{c}: {zhuyin} has {units} units");
            assert!(
                zhuyin.chars().all(is_zhuyin_symbol),
                "{c}: {zhuyin} has a non-Zhuyin symbol"
            );
        }
    }

    #[test]
    fn pinyin_entries_have_at_most_one_tone_mark() {
        const MARKED: &str = "āáǎàēéěèīíǐìōóǒòūúǔùǖǘǚǜ";
        for (c, syllable) in PINYIN {
            let marks = syllable.chars().filter(|ch| MARKED.contains(*ch)).count();
            assert!(marks <= 1, "{c}: {syllable} has {marks} tone marks");
            assert!(!syllable.is_empty());
        }
    }

    #[test]
    fn every_table_key_is_cjk() {
        for (c, _) in PINYIN.iter().chain(ZHUYIN).chain(COMMON_CORRECTIONS) {
            assert!(is_cjk(*c), "{c} is outside the CJK block");
        }
    }

    #[test]
    fn gloss_keys_are_phrases() {
        for (phrase, _) in ENGLISH_GLOSS {
            assert!(phrase.chars().count() >= 2, "{phrase} is a single glyph");
        }
    }

    #[test]
    fn gloss_prefers_longest_phrase() {
        let chars: Vec<char> = "魔法森林".chars().collect();
        assert_eq!(glosses().longest_match(&chars, 0), Some((4, "Magic Forest")));
        assert_eq!(glosses().longest_match(&chars, 2), Some((2, "Forest")));
        assert_eq!(glosses().longest_match(&chars, 1), None);
    }

    #[test]
    fn gloss_match_at_end_of_input() {
        let chars: Vec<char> = "小".chars().collect();
        assert_eq!(glosses().longest_match(&chars, 0), None);
        assert_eq!(glosses().longest_match(&chars, 1), None);
        assert_eq!(glosses().longest_match(&[], 0), None);
    }
}
