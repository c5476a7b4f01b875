//! Verse matching for recited utterances.

use chrono::Utc;
use uuid::Uuid;

use crate::normalize::normalize;
use crate::types::{Correction, Verse};

/// Minimum similarity for a verse to be considered a match.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// A verse selected as the best match together with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerseMatch<'a> {
    pub verse: &'a Verse,
    pub score: f64,
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows of the DP table
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate similarity (0.0 to 1.0) from Levenshtein distance, without
/// normalizing the inputs. Lengths are counted in chars.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Similarity of two texts after normalization.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(&normalize(a), &normalize(b))
}

/// Best-scoring verse for `recognized` using [`SIMILARITY_THRESHOLD`].
///
/// Ties keep the first candidate. Returns `None` for an empty candidate set
/// or when no candidate reaches the threshold.
pub fn find_best_match<'a>(recognized: &str, verses: &'a [Verse]) -> Option<&'a Verse> {
    best_match(recognized, verses, SIMILARITY_THRESHOLD).map(|m| m.verse)
}

/// Best-scoring verse for `recognized` with an explicit threshold.
pub fn best_match<'a>(
    recognized: &str,
    verses: &'a [Verse],
    threshold: f64,
) -> Option<VerseMatch<'a>> {
    let mut best: Option<VerseMatch<'a>> = None;
    let mut best_score = 0.0;

    for verse in verses {
        let score = similarity(recognized, &verse.text);
        if score > best_score && score >= threshold {
            best_score = score;
            best = Some(VerseMatch { verse, score });
        }
    }

    best
}

/// Score a recognized utterance against its expected verse.
pub fn generate_correction(expected: &Verse, recognized: &str) -> Correction {
    let accuracy = similarity(&expected.text, recognized);
    let timestamp = Utc::now();
    let suffix = Uuid::new_v4().simple().to_string();

    Correction {
        id: format!("correction_{}_{}", timestamp.timestamp_millis(), &suffix[..9]),
        verse_id: expected.id,
        expected_text: expected.text.clone(),
        recognized_text: recognized.to_string(),
        timestamp,
        accuracy,
    }
}
