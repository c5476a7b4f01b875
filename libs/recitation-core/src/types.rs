//! Core types for the recitation practice domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reference verse. Identity is `id`; never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub id: u32,
    pub surah: u32,
    pub ayah: u32,
    pub text: String,
    pub transliteration: String,
    pub translation: String,
}

/// Surah catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub number: u32,
    pub name: String,
    pub arabic_name: String,
}

/// Outcome of comparing one recognized utterance with its expected verse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub id: String,
    pub verse_id: u32,
    pub expected_text: String,
    pub recognized_text: String,
    pub timestamp: DateTime<Utc>,
    /// Similarity in `[0, 1]`.
    pub accuracy: f64,
}

/// Recording parameters handed to the audio capture layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub channels: u16,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            bit_depth: 16,
            channels: 1,
        }
    }
}

/// Opaque reference to a captured recording (usually a file URI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioHandle(String);

impl AudioHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn uri(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Thresholds that drive matching and session progression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Minimum similarity for a verse to count as a match.
    pub similarity_threshold: f64,
    /// Minimum accuracy for the session to move to the next verse.
    pub advance_threshold: f64,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: crate::matching::SIMILARITY_THRESHOLD,
            advance_threshold: 0.8,
        }
    }
}
