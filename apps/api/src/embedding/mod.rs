//! Shared sentence-embedding model.
//!
//! fastembed is synchronous and `embed` takes `&mut self`, so the model
//! lives behind an async mutex and inference runs inside `spawn_blocking`.
//! The model is loaded exactly once per process (in `main`) and the same
//! instance is reused for every similarity computation — reloading per
//! call would be both a correctness and a performance bug.

use std::sync::Arc;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use thiserror::Error;
use tokio::sync::Mutex;

/// Default sentence model: 384-dimension MiniLM.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("unknown embedding model: {0}")]
    UnknownModel(String),

    #[error("model load failed: {0}")]
    Load(String),

    #[error("embedding failed: {0}")]
    Inference(String),
}

/// Process-wide embedding model handle. Cheap to clone; all clones share
/// the same loaded model.
#[derive(Clone)]
pub struct Embedder {
    model: Arc<Mutex<TextEmbedding>>,
    dimension: usize,
}

impl Embedder {
    pub fn new(model_name: &str) -> Result<Self, EmbeddingError> {
        let model = parse_model_name(model_name)?;
        let options = InitOptions::new(model).with_show_download_progress(false);
        let model = TextEmbedding::try_new(options)
            .map_err(|e| EmbeddingError::Load(format!("{model_name}: {e}")))?;

        Ok(Self {
            model: Arc::new(Mutex::new(model)),
            dimension: MODEL_DIMENSION,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Embeds both snippets in a single batch.
    pub async fn embed_pair(
        &self,
        a: &str,
        b: &str,
    ) -> Result<(Vec<f32>, Vec<f32>), EmbeddingError> {
        let texts = vec![a.to_string(), b.to_string()];
        let model = Arc::clone(&self.model);

        let embeddings = tokio::task::spawn_blocking(move || {
            let mut model = model.blocking_lock();
            model.embed(texts, None)
        })
        .await
        .map_err(|e| EmbeddingError::Inference(format!("task join error: {e}")))?
        .map_err(|e| EmbeddingError::Inference(e.to_string()))?;

        let mut vectors = embeddings.into_iter();
        match (vectors.next(), vectors.next()) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(EmbeddingError::Inference(
                "embedding batch came back short".to_string(),
            )),
        }
    }
}

/// Every supported model is 384-dimensional.
const MODEL_DIMENSION: usize = 384;

fn parse_model_name(model_name: &str) -> Result<EmbeddingModel, EmbeddingError> {
    match model_name {
        "sentence-transformers/all-MiniLM-L6-v2" | "all-MiniLM-L6-v2" => {
            Ok(EmbeddingModel::AllMiniLML6V2)
        }
        "sentence-transformers/all-MiniLM-L12-v2" | "all-MiniLM-L12-v2" => {
            Ok(EmbeddingModel::AllMiniLML12V2)
        }
        "BAAI/bge-small-en-v1.5" | "bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        _ => Err(EmbeddingError::UnknownModel(format!(
            "{model_name}. Supported: all-MiniLM-L6-v2, all-MiniLM-L12-v2, bge-small-en-v1.5"
        ))),
    }
}

/// Cosine similarity between two vectors, in [-1, 1]. Zero-magnitude
/// vectors score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.3, 0.5, 0.2];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let a = vec![1.0, 2.0];
        let b = vec![-1.0, -2.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector_scores_zero() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = vec![0.2, 0.8, 0.1];
        let b = vec![0.5, 0.1, 0.9];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        assert!(matches!(
            parse_model_name("gpt-4"),
            Err(EmbeddingError::UnknownModel(_))
        ));
    }

    #[test]
    fn test_known_model_names_parse() {
        assert!(parse_model_name("all-MiniLM-L6-v2").is_ok());
        assert!(parse_model_name("sentence-transformers/all-MiniLM-L6-v2").is_ok());
        assert!(parse_model_name("bge-small-en-v1.5").is_ok());
    }
}
