//! Match Orchestrator — runs extraction and scoring across the fixed
//! section set and aggregates an overall score.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::matching::extractor::SectionExtractor;
use crate::matching::section::Section;
use crate::matching::similarity::{round1, SnippetScorer};

/// Per-section scores. Always carries all three keys; a section that could
/// not be scored stays at 0.0 rather than being dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionScores {
    pub skills: f32,
    pub experience: f32,
    pub education: f32,
}

impl SectionScores {
    pub fn get(&self, section: Section) -> f32 {
        match section {
            Section::Skills => self.skills,
            Section::Experience => self.experience,
            Section::Education => self.education,
        }
    }

    fn set(&mut self, section: Section, score: f32) {
        match section {
            Section::Skills => self.skills = score,
            Section::Experience => self.experience = score,
            Section::Education => self.education = score,
        }
    }

    /// Scores in the fixed section order.
    pub fn values(&self) -> [f32; 3] {
        [self.skills, self.experience, self.education]
    }
}

/// Full match report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Mean of the nonzero section scores, in [0, 100].
    pub overall_score: f32,
    pub section_scores: SectionScores,
    /// "llm" | "fallback" — which extraction backend ran, for transparency.
    pub extraction_backend: String,
}

/// Orchestrates the per-section pipeline: extract from both documents,
/// score the snippet pair, aggregate. Stateless between calls — snippets
/// are recomputed on every request, never cached, and no extraction or
/// scoring step is retried.
pub struct MatchEngine {
    extractor: SectionExtractor,
    scorer: Arc<dyn SnippetScorer>,
}

impl MatchEngine {
    pub fn new(extractor: SectionExtractor, scorer: Arc<dyn SnippetScorer>) -> Self {
        Self { extractor, scorer }
    }

    /// The sole caller-facing entry point. Infallible by contract: the
    /// worst case is an all-zero report, never an error.
    pub async fn match_resume_to_jd(&self, resume_text: &str, jd_text: &str) -> MatchReport {
        if resume_text.is_empty() || jd_text.is_empty() {
            debug!("empty input text, returning zero scores");
            return self.zero_report();
        }

        let mut section_scores = SectionScores::default();

        for section in Section::ALL {
            let resume_snippet = self.extractor.extract(resume_text, section, "resume").await;
            let jd_snippet = self
                .extractor
                .extract(jd_text, section, "job description")
                .await;
            let score = self.scorer.score(&resume_snippet, &jd_snippet).await;
            debug!(section = %section, score, "section scored");
            section_scores.set(section, score);
        }

        // Sections that could not be scored at all are excluded from the
        // mean, not averaged in as zero.
        let scored: Vec<f32> = section_scores
            .values()
            .into_iter()
            .filter(|s| *s > 0.0)
            .collect();
        let overall_score = if scored.is_empty() {
            0.0
        } else {
            round1(scored.iter().sum::<f32>() / scored.len() as f32)
        };

        info!(
            overall_score,
            skills = section_scores.skills,
            experience = section_scores.experience,
            education = section_scores.education,
            "match complete"
        );

        MatchReport {
            overall_score,
            section_scores,
            extraction_backend: self.extractor.backend().to_string(),
        }
    }

    fn zero_report(&self) -> MatchReport {
        MatchReport {
            overall_score: 0.0,
            section_scores: SectionScores::default(),
            extraction_backend: self.extractor.backend().to_string(),
        }
    }
}
