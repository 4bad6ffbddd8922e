mod config;
mod embedding;
mod errors;
mod ingest;
mod llm_client;
mod matching;
mod normalize;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::embedding::Embedder;
use crate::llm_client::LlmClient;
use crate::matching::engine::MatchEngine;
use crate::matching::extractor::{RemoteExtractor, SectionExtractor};
use crate::matching::similarity::EmbeddingScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchpoint API v{}", env!("CARGO_PKG_VERSION"));

    // Load the shared embedding model exactly once; reused for every request.
    let embedder = Embedder::new(&config.embedding_model)?;
    info!(
        model = %config.embedding_model,
        dimension = embedder.dimension(),
        "embedding model loaded"
    );

    // Remote extraction only runs when a credential is configured; otherwise
    // every section routes through the deterministic fallback.
    let remote: Option<Arc<dyn RemoteExtractor>> = match &config.hf_api_token {
        Some(token) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmClient::new(token.clone())))
        }
        None => {
            info!("HF_API_TOKEN not set — remote extraction disabled, using fallback only");
            None
        }
    };

    let extractor = SectionExtractor::new(remote);
    let scorer = Arc::new(EmbeddingScorer::new(embedder));
    let engine = Arc::new(MatchEngine::new(extractor, scorer));

    let state = AppState {
        engine,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
