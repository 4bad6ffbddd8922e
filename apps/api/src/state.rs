use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The match engine: section extractor + snippet scorer, built once at
    /// startup around the process-wide embedding model.
    pub engine: Arc<MatchEngine>,
    /// Kept for handlers that need runtime configuration (none yet).
    #[allow(dead_code)]
    pub config: Config,
}
