//! Positional word-level mistake reporting.
//!
//! Words are compared index by index without realignment, so a single
//! inserted or dropped word shifts every later position.

use std::fmt;

use serde::Serialize;

use crate::normalize::normalize;

/// One word-level discrepancy between expected and recognized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WordMistake {
    /// A different word was recognized at `position` (1-based).
    Mismatch {
        position: usize,
        expected: String,
        recognized: String,
    },
    /// Nothing was recognized at `position` (1-based).
    Missing { position: usize, expected: String },
}

impl fmt::Display for WordMistake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                position,
                expected,
                recognized,
            } => write!(
                f,
                "Word {}: Expected \"{}\", got \"{}\"",
                position, expected, recognized
            ),
            Self::Missing { position, expected } => {
                write!(f, "Word {}: Missing word \"{}\"", position, expected)
            }
        }
    }
}

/// Structured positional diff of `expected` against `recognized`.
pub fn word_mistakes(expected: &str, recognized: &str) -> Vec<WordMistake> {
    let expected = normalize(expected);
    let recognized = normalize(recognized);
    let expected_words: Vec<&str> = expected.split(' ').collect();
    let recognized_words: Vec<&str> = recognized.split(' ').collect();

    let max_len = expected_words.len().max(recognized_words.len());

    (0..max_len)
        .filter_map(|i| {
            let expected_word = expected_words.get(i).copied().unwrap_or("");
            let recognized_word = recognized_words.get(i).copied().unwrap_or("");

            if expected_word == recognized_word {
                return None;
            }

            let position = i + 1;
            let expected = expected_word.to_string();
            Some(if recognized_word.is_empty() {
                WordMistake::Missing { position, expected }
            } else {
                WordMistake::Mismatch {
                    position,
                    expected,
                    recognized: recognized_word.to_string(),
                }
            })
        })
        .collect()
}

/// Human-readable positional diff of `expected` against `recognized`.
pub fn identify_mistakes(expected: &str, recognized: &str) -> Vec<String> {
    word_mistakes(expected, recognized)
        .iter()
        .map(ToString::to_string)
        .collect()
}
