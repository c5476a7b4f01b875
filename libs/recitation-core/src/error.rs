//! Error types for recitation-core.

use thiserror::Error;

/// Errors raised while loading a verse corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("invalid corpus document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate verse id {id}")]
    DuplicateVerse { id: u32 },
}

/// Errors raised by a speech transcription backend.
#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("empty audio handle")]
    EmptyAudio,

    #[error("transcription unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by the practice session controller.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("verse {id} is not part of this session")]
    VerseNotFound { id: u32 },

    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
}
