//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from recitation-core
pub use recitation_core::{
    AudioConfig, Correction, MatchSettings, RecitationOutcome, RecitationSession, SessionSummary,
    Surah, Verse, WordMistake,
};

// === Catalog Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SurahListResponse {
    pub surahs: Vec<Surah>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerseListResponse {
    pub verses: Vec<Verse>,
}

/// Inclusive ayah bounds for a surah listing
#[derive(Debug, Default, Deserialize)]
pub struct VerseRangeQuery {
    pub start: Option<u32>,
    pub end: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

// === Matching Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub similarity: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BestMatchRequest {
    pub recognized_text: String,
    /// Surah to match against; defaults to the practice surah.
    #[serde(default)]
    pub surah: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct BestMatchResponse {
    pub verse: Option<Verse>,
    pub accuracy: Option<f64>,
    pub correction: Option<Correction>,
    pub mistakes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MistakesRequest {
    pub expected: String,
    pub recognized: String,
}

#[derive(Debug, Serialize)]
pub struct MistakesResponse {
    pub mistakes: Vec<String>,
    pub details: Vec<WordMistake>,
}

// === Session Types ===

/// Either already-recognized text or a recording to transcribe.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReciteRequest {
    #[serde(default)]
    pub recognized_text: Option<String>,
    #[serde(default)]
    pub audio_uri: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectVerseRequest {
    pub verse_id: u32,
}

/// Point-in-time view of the practice session
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub current_verse: Option<Verse>,
    pub verses: Vec<Verse>,
    pub corrections: Vec<Correction>,
    pub mistakes: Vec<String>,
    pub summary: SessionSummary,
    pub settings: MatchSettings,
}

impl From<&RecitationSession> for SessionSnapshot {
    fn from(session: &RecitationSession) -> Self {
        Self {
            id: session.id(),
            started_at: session.started_at(),
            ended_at: session.ended_at(),
            current_verse: session.current_verse().cloned(),
            verses: session.verses().to_vec(),
            corrections: session.corrections().to_vec(),
            mistakes: session.mistakes().to_vec(),
            summary: session.summary(),
            settings: session.settings(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReciteResponse {
    pub outcome: RecitationOutcome,
    pub session: SessionSnapshot,
}
