//! Verse catalog endpoints

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/surahs
pub async fn list_surahs(State(state): State<AppState>) -> Json<SurahListResponse> {
    Json(SurahListResponse {
        surahs: state.corpus.surahs(),
    })
}

/// GET /api/surahs/:surah/verses
pub async fn list_verses(
    State(state): State<AppState>,
    surah: std::result::Result<Path<u32>, PathRejection>,
    range: std::result::Result<Query<VerseRangeQuery>, QueryRejection>,
) -> Result<Json<VerseListResponse>> {
    let Path(surah) = surah?;
    let Query(range) = range?;
    Ok(Json(VerseListResponse {
        verses: state.corpus.verses_in_range(surah, range.start, range.end),
    }))
}

/// GET /api/verses/:id
pub async fn get_verse(
    State(state): State<AppState>,
    id: std::result::Result<Path<u32>, PathRejection>,
) -> Result<Json<Verse>> {
    let Path(id) = id?;
    state
        .corpus
        .verse(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Verse {} not found", id)))
}

/// GET /api/verses/search
///
/// An empty query matches every verse.
pub async fn search(
    State(state): State<AppState>,
    query: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<VerseListResponse>> {
    let Query(query) = query?;
    Ok(Json(VerseListResponse {
        verses: state.corpus.search(&query.q),
    }))
}
