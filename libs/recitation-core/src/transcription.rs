//! Speech transcription capability.

use crate::error::TranscriptionError;
use crate::types::AudioHandle;

/// Turns a captured recording into recognized text.
///
/// Implementations must tolerate garbled audio by returning whatever text
/// they recognized; an empty string is a valid transcription.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio: &AudioHandle) -> Result<String, TranscriptionError>;
}

/// Stand-in transcriber that always "hears" the opening Bismillah.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTranscriber;

impl PlaceholderTranscriber {
    pub const TEXT: &'static str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";
}

impl Transcriber for PlaceholderTranscriber {
    fn transcribe(&self, audio: &AudioHandle) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }
        tracing::debug!(uri = audio.uri(), "placeholder transcription");
        Ok(Self::TEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_returns_constant() {
        let text = PlaceholderTranscriber
            .transcribe(&AudioHandle::new("file:///rec.m4a"))
            .unwrap();
        assert_eq!(text, PlaceholderTranscriber::TEXT);
    }

    #[test]
    fn test_placeholder_rejects_empty_handle() {
        let err = PlaceholderTranscriber
            .transcribe(&AudioHandle::new(""))
            .unwrap_err();
        assert!(matches!(err, TranscriptionError::EmptyAudio));
    }
}
