//! Study entry model - the structured content for one task.

use serde::{Deserialize, Serialize};

/// Study content for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyEntry {
    /// Purpose of the task and its safety/engineering rationale
    pub overview: String,

    /// Facts and procedures, in recommended reading order
    pub study_guide: Vec<String>,

    /// Practical field advice
    pub pro_tips: Vec<String>,

    /// Citations to regulatory and standards documents
    pub references: Vec<String>,
}

impl StudyEntry {
    /// Items of one sequence section.
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::StudyGuide => &self.study_guide,
            Section::ProTips => &self.pro_tips,
            Section::References => &self.references,
        }
    }

    /// Whether every field is filled: non-blank overview, every section
    /// non-empty, no blank items.
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.overview)
            && Section::ALL.iter().all(|&s| {
                let items = self.section(s);
                !items.is_empty() && items.iter().all(|i| !is_blank(i))
            })
    }
}

/// The ordered list sections of a [`StudyEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// `studyGuide`
    StudyGuide,
    /// `proTips`
    ProTips,
    /// `references`
    References,
}

impl Section {
    /// All sections, in display order.
    pub const ALL: [Section; 3] = [Section::StudyGuide, Section::ProTips, Section::References];

    /// Field name as it appears in serialized entries.
    pub fn field_name(self) -> &'static str {
        match self {
            Section::StudyGuide => "studyGuide",
            Section::ProTips => "proTips",
            Section::References => "references",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StudyEntry {
        StudyEntry {
            overview: "Inspect the harness.".to_string(),
            study_guide: vec!["Check clamps".to_string(), "Check chafe".to_string()],
            pro_tips: vec!["Use a mirror".to_string()],
            references: vec!["AC 43.13-1B".to_string()],
        }
    }

    #[test]
    fn test_complete_entry() {
        assert!(sample().is_complete());
    }

    #[test]
    fn test_incomplete_entries() {
        let mut e = sample();
        e.overview = "   ".to_string();
        assert!(!e.is_complete());

        let mut e = sample();
        e.references.clear();
        assert!(!e.is_complete());

        let mut e = sample();
        e.pro_tips.push("\t".to_string());
        assert!(!e.is_complete());
    }

    #[test]
    fn test_camel_case_serialization() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("studyGuide").is_some());
        assert!(json.get("proTips").is_some());
        assert!(json.get("study_guide").is_none());
        assert_eq!(json["studyGuide"][1], "Check chafe");
    }

    #[test]
    fn test_section_accessor_preserves_order() {
        let e = sample();
        assert_eq!(e.section(Section::StudyGuide), &["Check clamps", "Check chafe"]);
        assert_eq!(Section::ProTips.to_string(), "proTips");
    }
}
