//! Phonetic annotation markup.
//!
//! Each glyph is classified once into [`Annotation`] and rendered for the
//! reading direction: horizontal text carries its ruby below the glyph,
//! vertical columns carry it to the side. Optional English glosses follow the
//! longest matching phrase.
//!
//! The output is an HTML fragment built from trusted table data and the input
//! text verbatim. Nothing is escaped, so untrusted text must never reach an
//! unescaped render sink through here.

use tracing::trace;

use crate::overrides::{CustomZhuyinStore, ZhuyinLookup};
use crate::settings::TextSettings;
use crate::tables::{self, is_cjk};
use crate::types::Formatted;

/// Ideographic full stop; terminates a vertical column.
pub const SENTENCE_DELIMITER: char = '。';

/// What a single glyph renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation<'a> {
    Bare,
    Pinyin(&'static str),
    /// Zhuyin symbols, one rendered unit per char.
    Zhuyin(&'a str),
}

/// Classify one glyph. Pinyin takes precedence when both are enabled and
/// available; anything unannotatable renders bare.
pub fn classify<'a>(c: char, settings: &TextSettings, zhuyin: ZhuyinLookup<'a>) -> Annotation<'a> {
    if !is_cjk(c) {
        return Annotation::Bare;
    }
    if settings.show_pinyin {
        if let Some(syllable) = tables::pinyin(c) {
            return Annotation::Pinyin(syllable);
        }
    }
    if settings.show_zhuyin {
        if let Some(symbols) = zhuyin.get(c) {
            return Annotation::Zhuyin(symbols);
        }
    }
    Annotation::Bare
}

/// Format `text` for display.
///
/// Horizontal layout yields [`Formatted::Text`]; vertical layout yields one
/// [`Formatted::Columns`] entry per sentence. Total over any input.
pub fn format_text(text: &str, settings: &TextSettings, store: &CustomZhuyinStore) -> Formatted {
    let annotating = settings.show_pinyin || settings.show_zhuyin || settings.show_english;

    if !annotating {
        return if settings.vertical_layout {
            Formatted::Columns(split_sentences(text))
        } else {
            Formatted::Text(text.to_string())
        };
    }

    let zhuyin = store.lookup();

    if settings.vertical_layout {
        let columns = split_sentences(text)
            .iter()
            .map(|sentence| render(sentence, settings, zhuyin, Orientation::Vertical))
            .collect();
        Formatted::Columns(columns)
    } else {
        Formatted::Text(render(text, settings, zhuyin, Orientation::Horizontal))
    }
}

/// Split on "。", drop blank fragments, and re-terminate every survivor,
/// including an unterminated trailing fragment.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(SENTENCE_DELIMITER)
        .filter(|s| !s.trim().is_empty())
        .map(|s| format!("{s}{SENTENCE_DELIMITER}"))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn pinyin_wrapper(self) -> &'static str {
        match self {
            Orientation::Horizontal => "inline-block relative mr-4 mb-8",
            Orientation::Vertical => "inline-block relative mr-6",
        }
    }

    fn pinyin_ruby(self) -> &'static str {
        match self {
            Orientation::Horizontal => {
                "absolute top-full left-1/2 transform -translate-x-1/2 mt-1 text-xs leading-tight"
            }
            Orientation::Vertical => "absolute left-full top-0 ml-1 text-xs leading-tight",
        }
    }

    fn zhuyin_wrapper(self) -> &'static str {
        match self {
            Orientation::Horizontal => "inline-block relative mr-4 mb-16",
            Orientation::Vertical => "inline-block relative mr-8",
        }
    }

    fn zhuyin_ruby(self) -> &'static str {
        match self {
            Orientation::Horizontal => {
                "absolute top-full left-1/2 transform -translate-x-1/2 mt-1 flex flex-col items-center justify-start text-xs leading-tight"
            }
            Orientation::Vertical => {
                "absolute left-full top-0 ml-1 flex flex-col items-center justify-start h-full text-xs leading-tight"
            }
        }
    }

    fn gloss(self) -> &'static str {
        match self {
            Orientation::Horizontal => "ml-1 text-sm text-gray-500",
            Orientation::Vertical => "inline-block mt-1 text-xs text-gray-500",
        }
    }
}

fn render(text: &str, settings: &TextSettings, zhuyin: ZhuyinLookup<'_>, orientation: Orientation) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 8);
    let mut i = 0;

    while i < chars.len() {
        let gloss = if settings.show_english {
            tables::glosses().longest_match(&chars, i)
        } else {
            None
        };

        match gloss {
            Some((len, english)) => {
                for &c in &chars[i..i + len] {
                    render_glyph(&mut out, c, classify(c, settings, zhuyin), orientation);
                }
                push_gloss(&mut out, english, orientation);
                i += len;
            }
            None => {
                let c = chars[i];
                render_glyph(&mut out, c, classify(c, settings, zhuyin), orientation);
                i += 1;
            }
        }
    }

    trace!("rendered {} glyphs as {:?}", chars.len(), orientation);
    out
}

fn render_glyph(out: &mut String, c: char, annotation: Annotation<'_>, orientation: Orientation) {
    match annotation {
        Annotation::Bare => out.push(c),
        Annotation::Pinyin(syllable) => {
            open_unit(out, c, orientation.pinyin_wrapper());
            out.push_str("<span class=\"");
            out.push_str(orientation.pinyin_ruby());
            out.push_str("\">");
            out.push_str(syllable);
            out.push_str("</span></span>");
        }
        Annotation::Zhuyin(symbols) => {
            open_unit(out, c, orientation.zhuyin_wrapper());
            out.push_str("<span class=\"");
            out.push_str(orientation.zhuyin_ruby());
            out.push_str("\">");
            for symbol in symbols.chars() {
                out.push_str("<span class=\"block text-center\">");
                out.push(symbol);
                out.push_str("</span>");
            }
            out.push_str("</span></span>");
        }
    }
}

/// Outer wrapper plus the glyph itself; the caller appends the ruby and
/// closes the wrapper.
fn open_unit(out: &mut String, c: char, wrapper: &str) {
    out.push_str("<span class=\"");
    out.push_str(wrapper);
    out.push_str("\"><span class=\"inline-block\">");
    out.push(c);
    out.push_str("</span>");
}

fn push_gloss(out: &mut String, english: &str, orientation: Orientation) {
    out.push_str("<span class=\"");
    out.push_str(orientation.gloss());
    out.push_str("\">(");
    out.push_str(english);
    out.push_str(")</span>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::check_coverage;

    fn settings(pinyin: bool, zhuyin: bool, english: bool, vertical: bool) -> TextSettings {
        TextSettings {
            show_pinyin: pinyin,
            show_zhuyin: zhuyin,
            show_english: english,
            vertical_layout: vertical,
            ..Default::default()
        }
    }

    fn all_settings() -> Vec<TextSettings> {
        let mut out = Vec::new();
        for bits in 0..16u8 {
            out.push(settings(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0));
        }
        out
    }

    fn text(f: Formatted) -> String {
        match f {
            Formatted::Text(s) => s,
            Formatted::Columns(c) => panic!("expected text, got columns {c:?}"),
        }
    }

    fn columns(f: Formatted) -> Vec<String> {
        match f {
            Formatted::Columns(c) => c,
            Formatted::Text(s) => panic!("expected columns, got text {s:?}"),
        }
    }

    // ── plain passthrough ───────────────────────────────────────────

    #[test]
    fn plain_horizontal_is_unchanged() {
        let store = CustomZhuyinStore::in_memory();
        let input = "小兔子在森林裡。";
        assert_eq!(text(format_text(input, &settings(false, false, false, false), &store)), input);
    }

    #[test]
    fn plain_vertical_splits_sentences() {
        let store = CustomZhuyinStore::in_memory();
        let cols = columns(format_text("A。B。C。", &settings(false, false, false, true), &store));
        assert_eq!(cols, vec!["A。", "B。", "C。"]);
    }

    #[test]
    fn vertical_terminates_trailing_fragment() {
        assert_eq!(split_sentences("甲。乙"), vec!["甲。", "乙。"]);
    }

    #[test]
    fn vertical_drops_blank_fragments() {
        assert_eq!(split_sentences("。。甲。 。"), vec!["甲。"]);
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    // ── classification ──────────────────────────────────────────────

    #[test]
    fn classify_prefers_pinyin() {
        let store = CustomZhuyinStore::in_memory();
        assert_eq!(
            classify('小', &settings(true, true, false, false), store.lookup()),
            Annotation::Pinyin("xiǎo")
        );
    }

    #[test]
    fn classify_falls_back_to_zhuyin_when_no_pinyin() {
        // 呢 has an override Zhuyin but no Pinyin.
        let mut store = CustomZhuyinStore::in_memory();
        store.set('呢', "ㄋㄜ˙");
        assert_eq!(
            classify('呢', &settings(true, true, false, false), store.lookup()),
            Annotation::Zhuyin("ㄋㄜ˙")
        );
    }

    #[test]
    fn classify_non_cjk_is_bare() {
        let store = CustomZhuyinStore::in_memory();
        for c in ['a', '。', '🐰', 'ㄅ', ' '] {
            assert_eq!(classify(c, &settings(true, false, false, false), store.lookup()), Annotation::Bare);
        }
    }

    // ── horizontal annotation ───────────────────────────────────────

    #[test]
    fn pinyin_scenario_little_rabbit() {
        let store = CustomZhuyinStore::in_memory();
        let out = text(format_text("小兔子", &settings(true, false, false, false), &store));
        let expected: String = [('小', "xiǎo"), ('兔', "tù"), ('子', "zi")]
            .iter()
            .map(|(c, py)| {
                format!(
                    "<span class=\"inline-block relative mr-4 mb-8\"><span class=\"inline-block\">{c}</span>\
                     <span class=\"absolute top-full left-1/2 transform -translate-x-1/2 mt-1 text-xs leading-tight\">{py}</span></span>"
                )
            })
            .collect();
        assert_eq!(out, expected);
        assert_eq!(out.matches("mb-8").count(), 3);
    }

    #[test]
    fn zhuyin_symbols_are_stacked_individually() {
        let store = CustomZhuyinStore::in_memory();
        let out = text(format_text("小", &settings(false, true, false, false), &store));
        assert!(out.contains("mb-16"));
        for symbol in ["ㄒ", "ㄧ", "ㄠ", "ˇ"] {
            assert!(out.contains(&format!("<span class=\"block text-center\">{symbol}</span>")));
        }
        assert_eq!(out.matches("block text-center").count(), 4);
    }

    #[test]
    fn punctuation_passes_through_annotated_text() {
        let store = CustomZhuyinStore::in_memory();
        let out = text(format_text("小，!", &settings(true, false, false, false), &store));
        assert!(out.ends_with("</span></span>，!"));
    }

    #[test]
    fn custom_override_is_rendered() {
        let mut store = CustomZhuyinStore::in_memory();
        store.set('於', "ㄩˊ");
        let out = text(format_text("於", &settings(false, true, false, false), &store));
        assert!(out.contains("<span class=\"block text-center\">ㄩ</span>"));
    }

    // ── vertical annotation ─────────────────────────────────────────

    #[test]
    fn vertical_annotation_sits_beside_glyph() {
        let store = CustomZhuyinStore::in_memory();
        let cols = columns(format_text("小兔。大熊。", &settings(false, true, false, true), &store));
        assert_eq!(cols.len(), 2);
        for col in &cols {
            assert!(col.contains("left-full top-0"));
            assert!(!col.contains("top-full"));
            assert!(col.ends_with('。'));
        }
    }

    #[test]
    fn vertical_pinyin_markup() {
        let store = CustomZhuyinStore::in_memory();
        let cols = columns(format_text("大", &settings(true, false, false, true), &store));
        assert_eq!(
            cols,
            vec![
                "<span class=\"inline-block relative mr-6\"><span class=\"inline-block\">大</span>\
                 <span class=\"absolute left-full top-0 ml-1 text-xs leading-tight\">dà</span></span>。"
            ]
        );
    }

    // ── English glosses ─────────────────────────────────────────────

    #[test]
    fn english_gloss_follows_phrase() {
        let store = CustomZhuyinStore::in_memory();
        let out = text(format_text("小兔子在森林裡", &settings(false, false, true, false), &store));
        assert_eq!(
            out,
            "小兔子<span class=\"ml-1 text-sm text-gray-500\">(Little Rabbit)</span>在\
             森林<span class=\"ml-1 text-sm text-gray-500\">(Forest)</span>裡"
        );
    }

    #[test]
    fn english_gloss_matches_longest_phrase() {
        let store = CustomZhuyinStore::in_memory();
        let out = text(format_text("魔法森林", &settings(false, false, true, false), &store));
        assert!(out.contains("(Magic Forest)"));
        assert!(!out.contains("(Forest)"));
    }

    #[test]
    fn english_gloss_with_annotation() {
        let store = CustomZhuyinStore::in_memory();
        let out = text(format_text("朋友", &settings(true, false, true, false), &store));
        let gloss_at = out.find("(Friend)").unwrap();
        assert!(out.find("péng").unwrap() < gloss_at);
        assert!(out.find("yǒu").unwrap() < gloss_at);
    }

    #[test]
    fn english_vertical_keeps_columns() {
        let store = CustomZhuyinStore::in_memory();
        let cols = columns(format_text("森林。花園。", &settings(false, false, true, true), &store));
        assert_eq!(cols.len(), 2);
        assert!(cols[0].contains("(Forest)"));
        assert!(cols[1].contains("(Garden)"));
    }

    // ── properties ──────────────────────────────────────────────────

    #[test]
    fn idempotent_on_covered_text() {
        let store = CustomZhuyinStore::in_memory();
        let input = "小兔子在森林裡遇到了一隻迷路的小動物。";
        assert!(check_coverage(input, &store).has_full_coverage);
        for s in all_settings() {
            assert_eq!(format_text(input, &s, &store), format_text(input, &s, &store));
        }
    }

    #[test]
    fn missing_chars_render_bare() {
        let store = CustomZhuyinStore::in_memory();
        let input = "龍終於來了嗎";
        let report = check_coverage(input, &store);
        assert!(!report.missing_chars.is_empty());
        let out = text(format_text(input, &settings(false, true, false, false), &store));
        for c in report.missing_chars {
            assert!(!out.contains(&format!("<span class=\"inline-block\">{c}</span>")));
            assert!(out.contains(c));
        }
    }

    #[test]
    fn non_cjk_text_is_untouched_by_any_settings() {
        let store = CustomZhuyinStore::in_memory();
        let input = "Hello 123 🐰🌈";
        for s in all_settings() {
            match format_text(input, &s, &store) {
                Formatted::Text(out) => assert_eq!(out, input),
                Formatted::Columns(cols) => assert_eq!(cols, vec![format!("{input}。")]),
            }
        }
    }

    #[test]
    fn empty_input_for_all_settings() {
        let store = CustomZhuyinStore::in_memory();
        for s in all_settings() {
            match format_text("", &s, &store) {
                Formatted::Text(out) => assert_eq!(out, ""),
                Formatted::Columns(cols) => assert!(cols.is_empty()),
            }
        }
    }
}
