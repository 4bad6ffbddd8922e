#![allow(dead_code)]

// All LLM prompt templates for the matching module.
// Short question-style prompts — they work better with instruction-tuned
// seq2seq models like Flan-T5 than long structured templates.

use crate::matching::section::Section;

/// How much of the source document is embedded into an extraction prompt.
pub const PROMPT_EXCERPT_CHARS: usize = 1000;

/// Builds the extraction prompt for one section. `context` names the
/// document kind ("resume" or "job description") so the model knows what
/// it is reading.
pub fn extraction_prompt(section: Section, context: &str, text: &str) -> String {
    let excerpt = truncate_chars(text, PROMPT_EXCERPT_CHARS);
    match section {
        Section::Skills => format!(
            "What technical skills are mentioned in this {context}?\n\n{excerpt}\n\nSkills:"
        ),
        Section::Experience => format!(
            "What work experience is described in this {context}?\n\n{excerpt}\n\nExperience:"
        ),
        Section::Education => format!(
            "What education or qualifications are mentioned in this {context}?\n\n{excerpt}\n\nEducation:"
        ),
    }
}

/// Generic summary prompt — used when no section-specific template applies.
pub fn summary_prompt(context: &str, text: &str) -> String {
    let excerpt = truncate_chars(text, PROMPT_EXCERPT_CHARS);
    format!("Summarize the key qualifications from this {context}:\n\n{excerpt}\n\nSummary:")
}

/// First `max_chars` characters of `text` (char-boundary safe).
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_context_and_text() {
        let prompt = extraction_prompt(Section::Skills, "resume", "Rust and Python developer");
        assert!(prompt.contains("resume"));
        assert!(prompt.contains("Rust and Python developer"));
        assert!(prompt.ends_with("Skills:"));
    }

    #[test]
    fn test_prompt_truncates_long_text() {
        let long = "x".repeat(5000);
        let prompt = extraction_prompt(Section::Experience, "job description", &long);
        // 1000 chars of body, not 5000
        assert!(prompt.contains(&"x".repeat(1000)));
        assert!(!prompt.contains(&"x".repeat(1001)));
    }

    #[test]
    fn test_each_section_has_distinct_template() {
        let text = "some document text";
        let skills = extraction_prompt(Section::Skills, "resume", text);
        let experience = extraction_prompt(Section::Experience, "resume", text);
        let education = extraction_prompt(Section::Education, "resume", text);
        assert_ne!(skills, experience);
        assert_ne!(experience, education);
    }

    #[test]
    fn test_truncate_chars_is_char_boundary_safe() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 3), "hél");
        assert_eq!(truncate_chars(text, 100), text);
    }

    #[test]
    fn test_summary_prompt_shape() {
        let prompt = summary_prompt("resume", "body");
        assert!(prompt.contains("body"));
        assert!(prompt.ends_with("Summary:"));
    }
}
