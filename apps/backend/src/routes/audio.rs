//! Audio capture configuration

use axum::Json;

use crate::models::AudioConfig;

/// GET /api/audio/config
pub async fn config() -> Json<AudioConfig> {
    Json(AudioConfig::default())
}
