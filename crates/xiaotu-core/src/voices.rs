//! Voice aliases and the offline voice list.

use crate::types::VoiceInfo;

/// Stacy, a sweet Chinese/English female voice.
pub const DEFAULT_VOICE_ID: &str = "hkfHEbBvdQFNX4uWHqRF";

/// Friendly alias → provider voice id.
pub const VOICE_ALIASES: &[(&str, &str)] = &[
    ("stacy", DEFAULT_VOICE_ID),
    ("gentle-female", "EXAVITQu4vr4xnSDxMaL"),
    ("lively-female", "ThT5KcBeYPX3keUQqHPh"),
    ("kind-male", "VR6AewLTigWG4xSOukaG"),
    ("young-male", "TxGEqnHWrfWFTfGW9XjX"),
    ("child-voice", "pFZP5JQG7iQjIQuC4Bku"),
    // No robot voice upstream; reuse Bella.
    ("robot-voice", "EXAVITQu4vr4xnSDxMaL"),
];

const FALLBACK_VOICES: &[(&str, &str, &str)] = &[
    (DEFAULT_VOICE_ID, "Stacy", "甜美可愛的中英文女性聲音"),
    ("EXAVITQu4vr4xnSDxMaL", "Bella", "溫暖柔和的女性聲音"),
    ("ThT5KcBeYPX3keUQqHPh", "Dorothy", "充滿活力的女性聲音"),
    ("VR6AewLTigWG4xSOukaG", "Josh", "溫和親切的男性聲音"),
    ("TxGEqnHWrfWFTfGW9XjX", "Brian", "清新年輕的男性聲音"),
    ("pFZP5JQG7iQjIQuC4Bku", "Lily", "可愛的兒童聲音"),
];

/// Map an alias to its voice id. Unknown values are assumed to already be
/// provider ids; blank input selects the default voice.
pub fn resolve_voice_id(voice: &str) -> &str {
    let voice = voice.trim();
    if voice.is_empty() {
        return DEFAULT_VOICE_ID;
    }
    VOICE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == voice)
        .map(|(_, id)| *id)
        .unwrap_or(voice)
}

/// Voices offered when the provider's list cannot be fetched.
pub fn fallback_voices() -> Vec<VoiceInfo> {
    FALLBACK_VOICES
        .iter()
        .map(|(id, name, description)| VoiceInfo {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: Some("premade".to_string()),
            preview_url: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_alias() {
        assert_eq!(resolve_voice_id("child-voice"), "pFZP5JQG7iQjIQuC4Bku");
    }

    #[test]
    fn passes_through_raw_ids() {
        assert_eq!(resolve_voice_id("abc123"), "abc123");
    }

    #[test]
    fn blank_selects_default() {
        assert_eq!(resolve_voice_id(""), DEFAULT_VOICE_ID);
        assert_eq!(resolve_voice_id("   "), DEFAULT_VOICE_ID);
    }

    #[test]
    fn fallback_list_starts_with_default() {
        let voices = fallback_voices();
        assert_eq!(voices.len(), 6);
        assert_eq!(voices[0].id, DEFAULT_VOICE_ID);
        assert!(voices.iter().all(|v| v.category.as_deref() == Some("premade")));
    }
}
