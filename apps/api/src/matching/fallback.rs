#![allow(dead_code)]

//! Deterministic fallback extraction — pure regex heuristics used whenever
//! remote extraction is unconfigured or yields no usable output.
//!
//! Pure functions over lowercased text: same input, same snippet, every
//! time. No network, no model, no state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::section::Section;

/// Longest generic excerpt returned for unstructured summaries.
const EXCERPT_CHARS: usize = 200;

/// Experience keeps only the first few matches — the leading ones carry the
/// years-of-experience and role phrases.
const MAX_EXPERIENCE_MATCHES: usize = 3;

static SKILL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"python|java|javascript|react|angular|vue|node|django|flask|spring",
        r"sql|mysql|postgresql|mongodb|oracle|database",
        r"aws|azure|gcp|cloud|kubernetes|docker",
        r"machine learning|ml|ai|data science|analytics",
        r"git|github|version control|agile|scrum",
    ])
});

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d+\+?\s*(?:years?|yrs?)\s*of\s*experience",
        r"worked\s+as|experience\s+as|role\s+as",
        r"developed|built|created|implemented|managed|led",
    ])
});

static EDUCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"bachelor|master|phd|degree|university|college",
        r"computer science|engineering|mathematics|statistics",
        r"certification|certified|certificate",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("fallback pattern must compile"))
        .collect()
}

/// Extracts a section snippet from raw document text using the
/// section-specific keyword heuristic. Returns an empty string when the
/// heuristic finds nothing.
pub fn extract(text: &str, section: Section) -> String {
    let text_lower = text.to_lowercase();
    match section {
        Section::Skills => {
            let found = collect_matches(&SKILL_PATTERNS, &text_lower);
            dedupe(found).join(", ")
        }
        Section::Experience => {
            let found = collect_matches(&EXPERIENCE_PATTERNS, &text_lower);
            found
                .into_iter()
                .take(MAX_EXPERIENCE_MATCHES)
                .collect::<Vec<_>>()
                .join("; ")
        }
        Section::Education => {
            let found = collect_matches(&EDUCATION_PATTERNS, &text_lower);
            dedupe(found).join("; ")
        }
    }
}

/// Last-resort summary for text with no recognizable section content:
/// the first 200 characters, with an ellipsis when truncated.
pub fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

fn collect_matches(patterns: &[Regex], text_lower: &str) -> Vec<String> {
    let mut found = Vec::new();
    for pattern in patterns {
        for m in pattern.find_iter(text_lower) {
            found.push(m.as_str().to_string());
        }
    }
    found
}

/// Order-preserving dedupe, so repeated runs produce identical snippets.
fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}
