// Matching core: section extraction, similarity scoring, aggregation.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod engine;
pub mod extractor;
pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod section;
pub mod similarity;
