//! The fixed set of document sections the matcher scores.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resume / job-description section.
///
/// Closed on purpose: prompt templates, fallback heuristics, and the score
/// map all match exhaustively, so adding a section is a single enum change
/// rather than string-matching sprinkled through the codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Skills,
    Experience,
    Education,
}

impl Section {
    /// Stable iteration order for scoring and display.
    pub const ALL: [Section; 3] = [Section::Skills, Section::Experience, Section::Education];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_section_in_order() {
        assert_eq!(
            Section::ALL,
            [Section::Skills, Section::Experience, Section::Education]
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Section::Skills).unwrap();
        assert_eq!(json, r#""skills""#);
        let section: Section = serde_json::from_str(r#""education""#).unwrap();
        assert_eq!(section, Section::Education);
    }

    #[test]
    fn test_display_matches_as_str() {
        for section in Section::ALL {
            assert_eq!(section.to_string(), section.as_str());
        }
    }
}
