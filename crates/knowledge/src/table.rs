//! Literal content tables - the authored source the registry is built from.

use certprep_core::StudyEntry;

/// One authored entry, exactly as written in a content table.
///
/// The key is kept as a plain string so that a malformed key still makes it
/// into the registry and gets reported by validation instead of vanishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Task key, e.g. `"5-01"`
    pub key: &'a str,

    /// Overview prose
    pub overview: &'a str,

    /// Study guide items, in reading order
    pub study_guide: &'a [&'a str],

    /// Pro tips
    pub pro_tips: &'a [&'a str],

    /// Reference citations
    pub references: &'a [&'a str],
}

impl RawEntry<'_> {
    /// Copy into an owned [`StudyEntry`].
    pub fn to_entry(&self) -> StudyEntry {
        StudyEntry {
            overview: self.overview.to_string(),
            study_guide: to_owned_list(self.study_guide),
            pro_tips: to_owned_list(self.pro_tips),
            references: to_owned_list(self.references),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A named group of entries, usually covering a range of categories.
#[derive(Debug, Clone, Copy)]
pub struct ContentTable<'a> {
    /// Table name, used in duplicate-key reports
    pub name: &'a str,

    /// Entries in authoring order
    pub entries: &'a [RawEntry<'a>],
}

impl<'a> ContentTable<'a> {
    /// Create a table.
    pub const fn new(name: &'a str, entries: &'a [RawEntry<'a>]) -> Self {
        Self { name, entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
