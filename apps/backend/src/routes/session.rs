//! Practice session endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use recitation_core::AudioHandle;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/session
pub async fn get(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(SessionSnapshot::from(&*session))
}

/// POST /api/session/recite
pub async fn recite(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ReciteRequest>, JsonRejection>,
) -> Result<Json<ReciteResponse>> {
    let Json(request) = payload?;
    let mut session = state.session.lock().await;

    let outcome = match (request.recognized_text, request.audio_uri) {
        (Some(text), _) => session.process_recognized_text(&text),
        (None, Some(uri)) => {
            session.process_audio(state.transcriber.as_ref(), &AudioHandle::new(uri))?
        }
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Either recognized_text or audio_uri is required".to_string(),
            ))
        }
    };

    tracing::info!(session = %session.id(), ?outcome, "Recitation processed");

    Ok(Json(ReciteResponse {
        outcome,
        session: SessionSnapshot::from(&*session),
    }))
}

/// POST /api/session/select
pub async fn select(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SelectVerseRequest>, JsonRejection>,
) -> Result<Json<SessionSnapshot>> {
    let Json(request) = payload?;
    let mut session = state.session.lock().await;
    session.select_verse(request.verse_id)?;
    Ok(Json(SessionSnapshot::from(&*session)))
}

/// POST /api/session/reset
pub async fn reset(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.reset();
    Json(SessionSnapshot::from(&*session))
}

/// POST /api/session/finish
pub async fn finish(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.finish();
    Json(SessionSnapshot::from(&*session))
}
