//! Shared types for the xiaotu crates.
//!
//! Result shapes here are serialized straight to the presentation layer, so
//! their JSON field names are part of the contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ─── Phonetic results ──────────────────────────────────────────────────────

/// Which CJK glyphs of a text have no Zhuyin in the combined table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub has_full_coverage: bool,
    /// First-occurrence order, no duplicates.
    pub missing_chars: Vec<char>,
}

impl CoverageReport {
    pub fn from_missing(missing_chars: Vec<char>) -> Self {
        Self {
            has_full_coverage: missing_chars.is_empty(),
            missing_chars,
        }
    }
}

/// Outcome of one auto-mapping pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoMapping {
    pub generated_count: usize,
    pub total_missing: usize,
    pub mapping: BTreeMap<char, String>,
}

/// Formatter output: one markup string for horizontal reading, one string
/// per sentence column for vertical reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Formatted {
    Text(String),
    Columns(Vec<String>),
}

impl Formatted {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Formatted::Text(s) => Some(s),
            Formatted::Columns(_) => None,
        }
    }
}

// ─── TTS proxy types ───────────────────────────────────────────────────────

/// Default ElevenLabs synthesis model.
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// Upstream voice API configuration.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub model_id: String,
    pub request_timeout_secs: u64,
    pub voices_timeout_secs: u64,
    pub max_audio_bytes: usize,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.elevenlabs.io/v1".into(),
            api_key: None,
            model_id: DEFAULT_MODEL_ID.into(),
            request_timeout_secs: 30,
            voices_timeout_secs: 15,
            max_audio_bytes: 50 * 1024 * 1024,
        }
    }
}

/// Synthesis tuning forwarded to the voice provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.5,
            use_speaker_boost: true,
            pitch: None,
            speed: None,
        }
    }
}

/// Body of a text-to-speech request, as sent by the reader and as forwarded
/// upstream once defaults are filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettings>,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: None,
            voice_settings: None,
        }
    }
}

/// A selectable voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_report_json_shape() {
        let report = CoverageReport::from_missing(vec!['於']);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "hasFullCoverage": false, "missingChars": ["於"] })
        );
    }

    #[test]
    fn empty_auto_mapping_json_shape() {
        let json = serde_json::to_value(AutoMapping::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "generatedCount": 0, "totalMissing": 0, "mapping": {} })
        );
    }

    #[test]
    fn formatted_is_untagged() {
        let text = serde_json::to_value(Formatted::Text("a".into())).unwrap();
        let cols = serde_json::to_value(Formatted::Columns(vec!["a。".into()])).unwrap();
        assert_eq!(text, serde_json::json!("a"));
        assert_eq!(cols, serde_json::json!(["a。"]));
    }

    #[test]
    fn speech_request_omits_unset_fields() {
        let json = serde_json::to_value(SpeechRequest::new("你好")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "你好" }));
    }

    #[test]
    fn default_voice_settings() {
        let json = serde_json::to_value(VoiceSettings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stability": 0.5,
                "similarity_boost": 0.75,
                "style": 0.5,
                "use_speaker_boost": true
            })
        );
    }
}
