//! Practice session controller.
//!
//! A session walks through an ordered list of verses, records one
//! [`Correction`] per matched attempt and accumulates mistake descriptions.
//! Both histories are append-only until [`RecitationSession::reset`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::SessionError;
use crate::matching::{best_match, generate_correction};
use crate::mistakes::identify_mistakes;
use crate::transcription::Transcriber;
use crate::types::{AudioHandle, Correction, MatchSettings, Verse};

/// Recorded when an utterance matches none of the session verses.
pub const NO_MATCH_MESSAGE: &str = "No matching verse found. Please try again.";

/// Result of processing one recognized utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecitationOutcome {
    /// The session has no current verse; nothing was recorded.
    Idle,
    /// A verse matched. `mistakes` is empty when accuracy cleared the
    /// advance threshold.
    Matched {
        correction: Correction,
        mistakes: Vec<String>,
        advanced: bool,
    },
    /// No verse reached the similarity threshold.
    NoMatch,
}

/// Aggregate view of a session's attempts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub attempts: usize,
    pub average_accuracy: Option<f64>,
    pub mistakes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecitationSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    verses: Vec<Verse>,
    current: Option<usize>,
    corrections: Vec<Correction>,
    mistakes: Vec<String>,
    settings: MatchSettings,
}

impl RecitationSession {
    pub fn new(verses: Vec<Verse>, settings: MatchSettings) -> Self {
        let current = if verses.is_empty() { None } else { Some(0) };
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            ended_at: None,
            verses,
            current,
            corrections: Vec::new(),
            mistakes: Vec::new(),
            settings,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn current_verse(&self) -> Option<&Verse> {
        self.current.and_then(|i| self.verses.get(i))
    }

    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    pub fn mistakes(&self) -> &[String] {
        &self.mistakes
    }

    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    /// Match `recognized` against the session verses and record the result.
    pub fn process_recognized_text(&mut self, recognized: &str) -> RecitationOutcome {
        if self.current.is_none() {
            return RecitationOutcome::Idle;
        }

        let Some(found) = best_match(recognized, &self.verses, self.settings.similarity_threshold)
        else {
            tracing::debug!(session = %self.id, "no verse matched");
            self.mistakes.push(NO_MATCH_MESSAGE.to_string());
            return RecitationOutcome::NoMatch;
        };

        let correction = generate_correction(found.verse, recognized);
        let accepted = correction.accuracy >= self.settings.advance_threshold;
        let mistakes = if accepted {
            Vec::new()
        } else {
            identify_mistakes(&found.verse.text, recognized)
        };

        tracing::debug!(
            session = %self.id,
            verse_id = correction.verse_id,
            accuracy = correction.accuracy,
            mistakes = mistakes.len(),
            "recitation matched"
        );

        self.corrections.push(correction.clone());
        self.mistakes.extend(mistakes.iter().cloned());
        let advanced = accepted && self.advance();

        RecitationOutcome::Matched {
            correction,
            mistakes,
            advanced,
        }
    }

    /// Transcribe `audio` and process the recognized text.
    pub fn process_audio(
        &mut self,
        transcriber: &dyn Transcriber,
        audio: &AudioHandle,
    ) -> Result<RecitationOutcome, SessionError> {
        let recognized = transcriber.transcribe(audio)?;
        Ok(self.process_recognized_text(&recognized))
    }

    /// Make the verse with `id` current.
    pub fn select_verse(&mut self, id: u32) -> Result<&Verse, SessionError> {
        let index = self
            .verses
            .iter()
            .position(|v| v.id == id)
            .ok_or(SessionError::VerseNotFound { id })?;
        self.current = Some(index);
        Ok(&self.verses[index])
    }

    /// Back to the first verse with empty histories.
    pub fn reset(&mut self) {
        self.current = if self.verses.is_empty() { None } else { Some(0) };
        self.corrections.clear();
        self.mistakes.clear();
        self.ended_at = None;
    }

    pub fn finish(&mut self) {
        self.ended_at = Some(Utc::now());
    }

    pub fn summary(&self) -> SessionSummary {
        let attempts = self.corrections.len();
        let average_accuracy = if attempts == 0 {
            None
        } else {
            Some(self.corrections.iter().map(|c| c.accuracy).sum::<f64>() / attempts as f64)
        };
        SessionSummary {
            attempts,
            average_accuracy,
            mistakes: self.mistakes.len(),
        }
    }

    /// Move to the next verse; stays put on the last one.
    fn advance(&mut self) -> bool {
        match self.current {
            Some(i) if i + 1 < self.verses.len() => {
                self.current = Some(i + 1);
                true
            }
            _ => false,
        }
    }
}
