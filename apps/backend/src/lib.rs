pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use recitation_core::{
    MatchSettings, PlaceholderTranscriber, RecitationSession, StaticCorpus, Transcriber,
    VerseSource,
};
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<dyn VerseSource>,
    pub transcriber: Arc<dyn Transcriber>,
    pub session: Arc<Mutex<RecitationSession>>,
    pub settings: MatchSettings,
    pub practice_surah: u32,
}

impl AppState {
    /// Build state with a fresh practice session over `practice_surah`.
    pub fn new(
        corpus: Arc<dyn VerseSource>,
        transcriber: Arc<dyn Transcriber>,
        practice_surah: u32,
        settings: MatchSettings,
    ) -> Self {
        let session = RecitationSession::new(corpus.verses_for(practice_surah), settings);
        Self {
            corpus,
            transcriber,
            session: Arc::new(Mutex::new(session)),
            settings,
            practice_surah,
        }
    }
}

/// Load the configured corpus, or the built-in one.
pub fn load_corpus(config: &Config) -> anyhow::Result<StaticCorpus> {
    match &config.corpus_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading corpus {}", path.display()))?;
            let corpus = StaticCorpus::from_json(&content)
                .with_context(|| format!("parsing corpus {}", path.display()))?;
            Ok(corpus)
        }
        None => Ok(StaticCorpus::builtin()),
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Catalog routes
        .route("/api/surahs", get(routes::verses::list_surahs))
        .route("/api/surahs/:surah/verses", get(routes::verses::list_verses))
        .route("/api/verses/search", get(routes::verses::search))
        .route("/api/verses/:id", get(routes::verses::get_verse))
        // Matching routes
        .route("/api/matching/similarity", post(routes::matching::similarity))
        .route("/api/matching/best-match", post(routes::matching::best_match))
        .route("/api/matching/mistakes", post(routes::matching::mistakes))
        // Session routes
        .route("/api/session", get(routes::session::get))
        .route("/api/session/recite", post(routes::session::recite))
        .route("/api/session/select", post(routes::session::select))
        .route("/api/session/reset", post(routes::session::reset))
        .route("/api/session/finish", post(routes::session::finish))
        // Audio routes
        .route("/api/audio/config", get(routes::audio::config))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading verse corpus...");
    let corpus = load_corpus(&config)?;
    tracing::info!(verses = corpus.len(), "Corpus loaded");

    let state = AppState::new(
        Arc::new(corpus),
        Arc::new(PlaceholderTranscriber),
        config.practice_surah,
        config.settings,
    );

    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
