use anyhow::{Context, Result};

use crate::embedding;

/// Application configuration loaded from environment variables.
///
/// Nothing here is required: the service runs with zero configuration,
/// in which case extraction is fallback-only and defaults apply.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hugging Face Inference API token. Absence is a valid configuration
    /// state, not an error — it disables remote extraction entirely and
    /// routes every section through the deterministic fallback.
    pub hf_api_token: Option<String>,
    pub embedding_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hf_api_token: std::env::var("HF_API_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| embedding::DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
