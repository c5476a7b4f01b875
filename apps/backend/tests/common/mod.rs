//! Common test utilities and fixtures for integration tests.
//!
//! Every context is built over the in-memory corpus, so no external
//! services are required.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use recitation_backend::{router, AppState};
use recitation_core::{
    AudioHandle, MatchSettings, PlaceholderTranscriber, StaticCorpus, Transcriber,
    TranscriptionError,
};

/// Transcriber standing in for an unreachable speech service.
pub struct OfflineTranscriber;

impl Transcriber for OfflineTranscriber {
    fn transcribe(&self, _audio: &AudioHandle) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::Unavailable("service offline".to_string()))
    }
}

/// Test context holding the shared state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Context over the built-in corpus with default thresholds.
    pub fn new() -> Self {
        Self::with_transcriber(Arc::new(PlaceholderTranscriber))
    }

    /// Context whose transcriber always fails.
    pub fn offline() -> Self {
        Self::with_transcriber(Arc::new(OfflineTranscriber))
    }

    pub fn with_settings(settings: MatchSettings) -> Self {
        Self::build(Arc::new(PlaceholderTranscriber), settings)
    }

    fn with_transcriber(transcriber: Arc<dyn Transcriber>) -> Self {
        Self::build(transcriber, MatchSettings::default())
    }

    fn build(transcriber: Arc<dyn Transcriber>, settings: MatchSettings) -> Self {
        let state = AppState::new(Arc::new(StaticCorpus::builtin()), transcriber, 1, settings);
        let app = router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
