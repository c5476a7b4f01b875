//! Core recitation library shared by the backend and any presentation layer.
//!
//! Provides:
//! - Arabic text normalization (diacritic stripping, whitespace and case folding)
//! - Verse matching (Levenshtein similarity, best match, corrections)
//! - Positional word-level mistake reporting
//! - Verse corpus and transcription capabilities
//! - Practice session controller

pub mod corpus;
pub mod error;
pub mod matching;
pub mod mistakes;
pub mod normalize;
pub mod session;
pub mod transcription;
pub mod types;

pub use corpus::{StaticCorpus, VerseSource};
pub use error::{CorpusError, SessionError, TranscriptionError};
pub use matching::{
    best_match, find_best_match, generate_correction, levenshtein_distance, normalized_similarity,
    similarity, VerseMatch, SIMILARITY_THRESHOLD,
};
pub use mistakes::{identify_mistakes, word_mistakes, WordMistake};
pub use normalize::normalize;
pub use session::{RecitationOutcome, RecitationSession, SessionSummary, NO_MATCH_MESSAGE};
pub use transcription::{PlaceholderTranscriber, Transcriber};
pub use types::{AudioConfig, AudioHandle, Correction, MatchSettings, Surah, Verse};
