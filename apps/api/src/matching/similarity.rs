//! Similarity Scorer — embedding cosine similarity mapped to a 0–100
//! percentage, with degenerate-input short-circuits and a nonlinear
//! rescale.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::embedding::{cosine_similarity, Embedder};

/// Scores a pair of section snippets in [0, 100]. Carried by the engine
/// as `Arc<dyn SnippetScorer>` — swap backends without touching the
/// orchestrator or handler code.
#[async_trait]
pub trait SnippetScorer: Send + Sync {
    async fn score(&self, a: &str, b: &str) -> f32;
}

/// Degenerate-input short-circuits shared by every scorer backend:
/// empty/whitespace snippets score 0.0, identical snippets score 100.0
/// without touching the embedding model. Symmetric in its arguments.
pub fn short_circuit(a: &str, b: &str) -> Option<f32> {
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return Some(0.0);
    }
    if a == b {
        return Some(100.0);
    }
    None
}

/// Nonlinear rescale keeping scores away from implausible extremes.
/// Raw percentages above 90 are pulled down (capped at 95) so nothing
/// reads as a perfect match; raw percentages below 10 are pushed up
/// (floored at 5) to signal residual relatedness. 90 and 10 themselves
/// pass through unchanged.
pub fn rescale(percentage: f32) -> f32 {
    if percentage > 90.0 {
        (percentage * 0.9).min(95.0)
    } else if percentage < 10.0 {
        (percentage * 1.2).max(5.0)
    } else {
        percentage
    }
}

/// Rounds to one decimal place.
pub fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// The default scorer backend: shared embedding model + cosine similarity.
pub struct EmbeddingScorer {
    embedder: Embedder,
}

impl EmbeddingScorer {
    pub fn new(embedder: Embedder) -> Self {
        Self { embedder }
    }
}

#[async_trait]
impl SnippetScorer for EmbeddingScorer {
    async fn score(&self, a: &str, b: &str) -> f32 {
        if let Some(score) = short_circuit(a, b) {
            debug!(score, "similarity short-circuit");
            return score;
        }

        let (va, vb) = match self.embedder.embed_pair(a, b).await {
            Ok(pair) => pair,
            Err(e) => {
                // Never propagate: a broken embedding backend degrades the
                // score, not the request.
                warn!(error = %e, "embedding failed, scoring 0.0");
                return 0.0;
            }
        };

        let raw = cosine_similarity(&va, &vb);
        let percentage = round1(rescale(raw * 100.0));
        debug!(raw, percentage, "similarity computed");
        percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_either_side_scores_zero() {
        assert_eq!(short_circuit("", "anything"), Some(0.0));
        assert_eq!(short_circuit("anything", ""), Some(0.0));
        assert_eq!(short_circuit("   ", "anything"), Some(0.0));
    }

    #[test]
    fn test_identical_after_trim_scores_hundred() {
        assert_eq!(short_circuit("python, flask", "  python, flask  "), Some(100.0));
    }

    #[test]
    fn test_distinct_snippets_do_not_short_circuit() {
        assert_eq!(short_circuit("python", "java"), None);
    }

    #[test]
    fn test_short_circuit_is_symmetric() {
        assert_eq!(short_circuit("a", ""), short_circuit("", "a"));
        assert_eq!(short_circuit("x", "x"), short_circuit("x", "x"));
    }

    #[test]
    fn test_rescale_90_is_unchanged() {
        assert_eq!(rescale(90.0), 90.0);
    }

    #[test]
    fn test_rescale_above_90_is_pulled_down() {
        let rescaled = rescale(90.1);
        assert!(rescaled < 90.1);
        assert!((rescaled - 81.09).abs() < 1e-3);
    }

    #[test]
    fn test_rescale_10_is_unchanged() {
        assert_eq!(rescale(10.0), 10.0);
    }

    #[test]
    fn test_rescale_below_10_is_pushed_up() {
        let rescaled = rescale(9.9);
        assert!(rescaled > 9.9);
        assert!((rescaled - 11.88).abs() < 1e-3);
    }

    #[test]
    fn test_rescale_high_branch_never_exceeds_95() {
        assert_eq!(rescale(120.0), 95.0);
        assert!(rescale(100.0) <= 95.0);
    }

    #[test]
    fn test_rescale_low_branch_never_falls_below_5() {
        assert_eq!(rescale(0.0), 5.0);
        assert_eq!(rescale(2.0), 5.0);
        assert!(rescale(9.0) >= 5.0);
    }

    #[test]
    fn test_rescale_midrange_unchanged() {
        assert_eq!(rescale(50.0), 50.0);
        assert_eq!(rescale(10.1), 10.1);
        assert_eq!(rescale(89.9), 89.9);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(70.04), 70.0);
        assert_eq!(round1(70.05), 70.1);
        assert_eq!(round1(100.0), 100.0);
    }
}
