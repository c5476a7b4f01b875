//! Stateless matching endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use recitation_core::{
    best_match as find_match, generate_correction, identify_mistakes, word_mistakes,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/matching/similarity
pub async fn similarity(
    payload: std::result::Result<Json<SimilarityRequest>, JsonRejection>,
) -> Result<Json<SimilarityResponse>> {
    let Json(request) = payload?;
    Ok(Json(SimilarityResponse {
        similarity: recitation_core::similarity(&request.a, &request.b),
    }))
}

/// POST /api/matching/best-match
pub async fn best_match(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BestMatchRequest>, JsonRejection>,
) -> Result<Json<BestMatchResponse>> {
    let Json(request) = payload?;
    let surah = request.surah.unwrap_or(state.practice_surah);
    let candidates = state.corpus.verses_for(surah);

    let response = match find_match(
        &request.recognized_text,
        &candidates,
        state.settings.similarity_threshold,
    ) {
        Some(found) => {
            let correction = generate_correction(found.verse, &request.recognized_text);
            let mistakes = identify_mistakes(&found.verse.text, &request.recognized_text);
            BestMatchResponse {
                verse: Some(found.verse.clone()),
                accuracy: Some(correction.accuracy),
                correction: Some(correction),
                mistakes,
            }
        }
        None => {
            tracing::debug!(surah, "no verse matched");
            BestMatchResponse {
                verse: None,
                accuracy: None,
                correction: None,
                mistakes: Vec::new(),
            }
        }
    };

    Ok(Json(response))
}

/// POST /api/matching/mistakes
pub async fn mistakes(
    payload: std::result::Result<Json<MistakesRequest>, JsonRejection>,
) -> Result<Json<MistakesResponse>> {
    let Json(request) = payload?;
    let details = word_mistakes(&request.expected, &request.recognized);
    Ok(Json(MistakesResponse {
        mistakes: details.iter().map(ToString::to_string).collect(),
        details,
    }))
}
