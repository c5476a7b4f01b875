//! Test fixtures and request builders.

use serde_json::json;

/// Al-Fatihah 1:1 with full diacritics.
pub const BISMILLAH: &str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";

/// Al-Fatihah 1:1 without diacritics.
pub const BISMILLAH_PLAIN: &str = "بسم الله الرحمن الرحيم";

/// Al-Fatihah 1:2 without diacritics.
pub const HAMD_PLAIN: &str = "الحمد لله رب العالمين";

pub const UNRELATED: &str = "completely unrelated text";

pub fn similarity_request(a: &str, b: &str) -> serde_json::Value {
    json!({ "a": a, "b": b })
}

pub fn best_match_request(recognized_text: &str, surah: Option<u32>) -> serde_json::Value {
    match surah {
        Some(s) => json!({ "recognized_text": recognized_text, "surah": s }),
        None => json!({ "recognized_text": recognized_text }),
    }
}

pub fn mistakes_request(expected: &str, recognized: &str) -> serde_json::Value {
    json!({ "expected": expected, "recognized": recognized })
}

pub fn recite_text_request(recognized_text: &str) -> serde_json::Value {
    json!({ "recognized_text": recognized_text })
}

pub fn recite_audio_request(audio_uri: &str) -> serde_json::Value {
    json!({ "audio_uri": audio_uri })
}

pub fn select_verse_request(verse_id: u32) -> serde_json::Value {
    json!({ "verse_id": verse_id })
}
