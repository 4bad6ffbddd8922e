#![allow(dead_code)]

//! Text normalization — an optional pre-stage for keyword-level
//! comparisons. The embedding path deliberately does NOT normalize (the
//! sentence model wants natural prose); this is for callers that compare
//! tokens directly.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Common English stopwords.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can",
        "this", "that", "these", "those", "it", "its", "as", "if", "then", "else", "when", "where",
        "why", "how", "all", "each", "every", "both", "few", "more", "most", "other", "some",
        "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "just",
        "also", "i", "you", "he", "she", "we", "they", "my", "your", "our", "their",
    ]
    .iter()
    .copied()
    .collect()
});

/// Lowercases, strips every character that is not a lowercase ASCII letter
/// or whitespace (digits and punctuation included), drops stopwords, and
/// rejoins the surviving tokens with single spaces.
///
/// Pure and deterministic; idempotent after the first pass.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| !STOPWORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("Rust Developer"), "rust developer");
    }

    #[test]
    fn test_strips_digits_and_punctuation() {
        assert_eq!(normalize("3+ years, C++!"), "years c");
    }

    #[test]
    fn test_removes_stopwords() {
        assert_eq!(
            normalize("the quick fox and the lazy dog"),
            "quick fox lazy dog"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("python   \n\t  flask"), "python flask");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Looking for a Python developer with 5 years of ML experience.");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_empty_and_stopword_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("the and of"), "");
    }
}
