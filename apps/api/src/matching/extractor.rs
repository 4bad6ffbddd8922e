//! Section Extractor — remote-first LLM extraction with a deterministic
//! regex fallback.
//!
//! The remote path is a pluggable `RemoteExtractor` trait object so the
//! pure fallback heuristics stay testable without any network mocking.
//! This component never fails: every failure mode degrades to the fallback
//! or to an empty snippet.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::llm_client::LlmClient;
use crate::matching::fallback;
use crate::matching::prompts::extraction_prompt;
use crate::matching::section::Section;

/// Inputs shorter than this are not worth extracting from.
const MIN_TEXT_CHARS: usize = 10;
/// Remote output shorter than this (after trim) counts as unusable.
const MIN_REMOTE_CHARS: usize = 3;

/// Remote extraction capability. `None` means "no usable output" — the
/// caller falls back; implementations never surface errors.
#[async_trait]
pub trait RemoteExtractor: Send + Sync {
    async fn try_extract(&self, text: &str, section: Section, context: &str) -> Option<String>;
}

#[async_trait]
impl RemoteExtractor for LlmClient {
    async fn try_extract(&self, text: &str, section: Section, context: &str) -> Option<String> {
        let prompt = extraction_prompt(section, context, text);
        match self.generate(&prompt).await {
            Ok(output) => Some(output),
            Err(e) => {
                warn!(section = %section, context, error = %e, "remote extraction failed");
                None
            }
        }
    }
}

/// Extracts one section's snippet from raw document text.
pub struct SectionExtractor {
    remote: Option<Arc<dyn RemoteExtractor>>,
}

impl SectionExtractor {
    pub fn new(remote: Option<Arc<dyn RemoteExtractor>>) -> Self {
        Self { remote }
    }

    /// Extractor with no remote capability (no credential configured).
    pub fn fallback_only() -> Self {
        Self { remote: None }
    }

    /// Which extraction backend requests run through — reported back to
    /// callers for transparency.
    pub fn backend(&self) -> &'static str {
        if self.remote.is_some() {
            "llm"
        } else {
            "fallback"
        }
    }

    /// Produces the snippet for `section`, trimmed. Degrades to the regex
    /// fallback whenever the remote path is unconfigured or yields output
    /// that is missing or too short to trust.
    pub async fn extract(&self, text: &str, section: Section, context: &str) -> String {
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            debug!(section = %section, context, "text too short, skipping extraction");
            return String::new();
        }

        if let Some(remote) = &self.remote {
            if let Some(output) = remote.try_extract(text, section, context).await {
                let output = output.trim();
                if output.chars().count() >= MIN_REMOTE_CHARS {
                    debug!(section = %section, context, chars = output.len(), "remote extraction succeeded");
                    return output.to_string();
                }
                debug!(section = %section, context, "remote output too short, falling back");
            }
        }

        let snippet = fallback::extract(text, section);
        debug!(section = %section, context, chars = snippet.len(), "fallback extraction");
        snippet.trim().to_string()
    }
}
