//! Text and JSON rendering for CLI output.

use certprep_core::{Section, StudyEntry};
use certprep_knowledge::SearchHit;
use serde::Serialize;

/// An entry together with its key, for JSON output.
#[derive(Debug, Serialize)]
pub struct KeyedEntry<'a> {
    /// Task key
    pub key: &'a str,

    /// Entry fields, inlined
    #[serde(flatten)]
    pub entry: &'a StudyEntry,
}

/// A search hit, for JSON output.
#[derive(Debug, Serialize)]
pub struct HitSummary<'a> {
    /// Task key
    pub key: &'a str,
    /// Relevance score
    pub score: f64,
    /// Entry overview
    pub overview: &'a str,
}

impl<'a> From<&SearchHit<'a>> for HitSummary<'a> {
    fn from(hit: &SearchHit<'a>) -> Self {
        Self {
            key: hit.key,
            score: hit.score,
            overview: &hit.entry.overview,
        }
    }
}

/// Multi-line text form of an entry.
pub fn format_entry(key: &str, entry: &StudyEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!("Task {key}\n\n"));
    out.push_str(&format!("Overview:\n  {}\n", entry.overview));

    for section in Section::ALL {
        out.push_str(&format!("\n{}:\n", section_title(section)));
        for (i, item) in entry.section(section).iter().enumerate() {
            match section {
                Section::StudyGuide => out.push_str(&format!("  {}. {item}\n", i + 1)),
                _ => out.push_str(&format!("  - {item}\n")),
            }
        }
    }

    out
}

fn section_title(section: Section) -> &'static str {
    match section {
        Section::StudyGuide => "Study guide",
        Section::ProTips => "Pro tips",
        Section::References => "References",
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
