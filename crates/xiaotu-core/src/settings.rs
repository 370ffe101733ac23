//! Reader display preferences and their persistence.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::storage::{KeyValueStorage, MemoryStorage};

/// Storage slot holding [`TextSettings`] as a JSON object.
pub const TEXT_SETTINGS_KEY: &str = "textSettings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
}

impl FontSize {
    /// Utility class applied to the reading surface.
    pub fn css_class(self) -> &'static str {
        match self {
            FontSize::Small => "text-sm",
            FontSize::Medium => "text-base",
            FontSize::Large => "text-lg",
            FontSize::ExtraLarge => "text-xl",
        }
    }
}

impl std::str::FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            "extra-large" => Ok(FontSize::ExtraLarge),
            other => Err(format!("unknown font size: {other}")),
        }
    }
}

/// Display options for the formatter.
///
/// `show_pinyin` and `show_zhuyin` are never both true once a value has gone
/// through [`TextSettings::apply`] or [`SettingsStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSettings {
    pub font_size: FontSize,
    pub show_pinyin: bool,
    pub show_zhuyin: bool,
    pub show_english: bool,
    pub vertical_layout: bool,
}

/// A partial change to [`TextSettings`]; unset fields keep their value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSettingsUpdate {
    pub font_size: Option<FontSize>,
    pub show_pinyin: Option<bool>,
    pub show_zhuyin: Option<bool>,
    pub show_english: Option<bool>,
    pub vertical_layout: Option<bool>,
}

impl TextSettings {
    /// Merge `update` in. Turning Pinyin on turns Zhuyin off; otherwise
    /// turning Zhuyin on turns Pinyin off.
    pub fn apply(&mut self, update: TextSettingsUpdate) {
        if let Some(v) = update.font_size {
            self.font_size = v;
        }
        if let Some(v) = update.show_pinyin {
            self.show_pinyin = v;
        }
        if let Some(v) = update.show_zhuyin {
            self.show_zhuyin = v;
        }
        if let Some(v) = update.show_english {
            self.show_english = v;
        }
        if let Some(v) = update.vertical_layout {
            self.vertical_layout = v;
        }

        if update.show_pinyin == Some(true) {
            self.show_zhuyin = false;
        } else if update.show_zhuyin == Some(true) {
            self.show_pinyin = false;
        }
    }

    /// Resolve a conflicting pair in favor of Pinyin.
    pub fn normalized(mut self) -> Self {
        if self.show_pinyin && self.show_zhuyin {
            self.show_zhuyin = false;
        }
        self
    }
}

/// Current settings plus the slot they persist to.
pub struct SettingsStore {
    current: TextSettings,
    storage: Box<dyn KeyValueStorage>,
}

impl SettingsStore {
    /// Defaults backed by throwaway memory.
    pub fn in_memory() -> Self {
        Self {
            current: TextSettings::default(),
            storage: Box::new(MemoryStorage::new()),
        }
    }

    /// Load saved settings merged over the defaults, field by field. A field
    /// that is missing or fails to decode keeps its default; a missing or
    /// unreadable slot yields the defaults.
    pub fn load(storage: impl KeyValueStorage + 'static) -> Self {
        let current = match storage.load(TEXT_SETTINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Map<String, Value>>(&raw) {
                Ok(saved) => merge_saved(&saved).normalized(),
                Err(e) => {
                    warn!("failed to parse saved text settings: {e}");
                    TextSettings::default()
                }
            },
            Ok(None) => TextSettings::default(),
            Err(e) => {
                warn!("failed to load text settings: {e}");
                TextSettings::default()
            }
        };
        debug!("text settings loaded: {current:?}");
        Self {
            current,
            storage: Box::new(storage),
        }
    }

    pub fn current(&self) -> TextSettings {
        self.current
    }

    /// Apply a partial update, persist, and return the result.
    pub fn update(&mut self, update: TextSettingsUpdate) -> TextSettings {
        self.current.apply(update);
        self.persist();
        self.current
    }

    fn persist(&self) {
        match serde_json::to_string(&self.current) {
            Ok(json) => {
                if let Err(e) = self.storage.save(TEXT_SETTINGS_KEY, &json) {
                    warn!("failed to save text settings: {e}");
                }
            }
            Err(e) => warn!("failed to serialize text settings: {e}"),
        }
    }
}

fn merge_saved(saved: &Map<String, Value>) -> TextSettings {
    let mut s = TextSettings::default();
    merge_field(saved, "fontSize", &mut s.font_size);
    merge_field(saved, "showPinyin", &mut s.show_pinyin);
    merge_field(saved, "showZhuyin", &mut s.show_zhuyin);
    merge_field(saved, "showEnglish", &mut s.show_english);
    merge_field(saved, "verticalLayout", &mut s.vertical_layout);
    s
}

fn merge_field<T: DeserializeOwned>(saved: &Map<String, Value>, key: &str, slot: &mut T) {
    let Some(value) = saved.get(key) else {
        return;
    };
    match T::deserialize(value) {
        Ok(v) => *slot = v,
        Err(e) => warn!("ignoring saved text setting {key}: {e}"),
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FailingStorage;

    fn update() -> TextSettingsUpdate {
        TextSettingsUpdate::default()
    }

    #[test]
    fn defaults() {
        let s = TextSettings::default();
        assert_eq!(s.font_size, FontSize::Large);
        assert!(!s.show_pinyin && !s.show_zhuyin && !s.show_english && !s.vertical_layout);
    }

    #[test]
    fn pinyin_clears_zhuyin() {
        let mut s = TextSettings {
            show_zhuyin: true,
            ..Default::default()
        };
        s.apply(TextSettingsUpdate {
            show_pinyin: Some(true),
            ..update()
        });
        assert!(s.show_pinyin);
        assert!(!s.show_zhuyin);
    }

    #[test]
    fn zhuyin_clears_pinyin() {
        let mut s = TextSettings {
            show_pinyin: true,
            ..Default::default()
        };
        s.apply(TextSettingsUpdate {
            show_zhuyin: Some(true),
            ..update()
        });
        assert!(s.show_zhuyin);
        assert!(!s.show_pinyin);
    }

    #[test]
    fn both_requested_keeps_pinyin() {
        let mut s = TextSettings::default();
        s.apply(TextSettingsUpdate {
            show_pinyin: Some(true),
            show_zhuyin: Some(true),
            ..update()
        });
        assert!(s.show_pinyin);
        assert!(!s.show_zhuyin);
    }

    #[test]
    fn turning_off_leaves_the_other_alone() {
        let mut s = TextSettings {
            show_zhuyin: true,
            ..Default::default()
        };
        s.apply(TextSettingsUpdate {
            show_pinyin: Some(false),
            ..update()
        });
        assert!(s.show_zhuyin);
    }

    #[test]
    fn unrelated_update_keeps_flags() {
        let mut s = TextSettings {
            show_pinyin: true,
            ..Default::default()
        };
        s.apply(TextSettingsUpdate {
            font_size: Some(FontSize::Small),
            vertical_layout: Some(true),
            ..update()
        });
        assert!(s.show_pinyin);
        assert!(s.vertical_layout);
        assert_eq!(s.font_size, FontSize::Small);
    }

    #[test]
    fn json_uses_camel_case_and_kebab_font() {
        let s = TextSettings {
            font_size: FontSize::ExtraLarge,
            ..Default::default()
        };
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["fontSize"], "extra-large");
        assert_eq!(json["verticalLayout"], false);
    }

    #[test]
    fn load_merges_over_defaults() {
        let storage = MemoryStorage::new().with_slot(TEXT_SETTINGS_KEY, r#"{"showZhuyin":true}"#);
        let s = SettingsStore::load(storage).current();
        assert!(s.show_zhuyin);
        assert_eq!(s.font_size, FontSize::Large);
    }

    #[test]
    fn load_ignores_unknown_fields() {
        let storage = MemoryStorage::new()
            .with_slot(TEXT_SETTINGS_KEY, r#"{"fontSize":"small","legacyTheme":"dark"}"#);
        assert_eq!(SettingsStore::load(storage).current().font_size, FontSize::Small);
    }

    #[test]
    fn load_normalizes_conflicting_flags() {
        let storage = MemoryStorage::new()
            .with_slot(TEXT_SETTINGS_KEY, r#"{"showPinyin":true,"showZhuyin":true}"#);
        let s = SettingsStore::load(storage).current();
        assert!(s.show_pinyin && !s.show_zhuyin);
    }

    #[test]
    fn load_keeps_valid_fields_when_one_is_invalid() {
        let storage = MemoryStorage::new().with_slot(
            TEXT_SETTINGS_KEY,
            r#"{"fontSize":"huge","showPinyin":null,"showZhuyin":true,"verticalLayout":true}"#,
        );
        let s = SettingsStore::load(storage).current();
        assert_eq!(s.font_size, FontSize::Large);
        assert!(!s.show_pinyin);
        assert!(s.show_zhuyin);
        assert!(s.vertical_layout);
    }

    #[test]
    fn malformed_blob_falls_back_to_defaults() {
        let storage = MemoryStorage::new().with_slot(TEXT_SETTINGS_KEY, "[1,2");
        assert_eq!(SettingsStore::load(storage).current(), TextSettings::default());
    }

    #[test]
    fn update_persists() {
        let storage = MemoryStorage::new();
        let mut store = SettingsStore::load(storage.clone());
        store.update(TextSettingsUpdate {
            show_pinyin: Some(true),
            ..update()
        });
        assert_eq!(storage.writes(), 1);
        let reloaded = SettingsStore::load(storage).current();
        assert!(reloaded.show_pinyin);
    }

    #[test]
    fn failing_storage_keeps_working() {
        let mut store = SettingsStore::load(FailingStorage);
        let s = store.update(TextSettingsUpdate {
            show_english: Some(true),
            ..update()
        });
        assert!(s.show_english);
    }

    #[test]
    fn font_classes() {
        assert_eq!(FontSize::Small.css_class(), "text-sm");
        assert_eq!(FontSize::Medium.css_class(), "text-base");
        assert_eq!(FontSize::Large.css_class(), "text-lg");
        assert_eq!(FontSize::ExtraLarge.css_class(), "text-xl");
        assert_eq!("extra-large".parse::<FontSize>(), Ok(FontSize::ExtraLarge));
        assert!("huge".parse::<FontSize>().is_err());
    }
}
