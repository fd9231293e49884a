//! Error types shared by the content registry and its callers.

use crate::entry::Section;

/// Errors from parsing a task key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// Does not match `<digits>-<two digits>`
    #[error("malformed task key {0:?}: expected \"<category>-<NN>\"")]
    Malformed(String),

    /// Category written with a leading zero
    #[error("task key {0:?} has a leading zero in its category")]
    LeadingZero(String),

    /// Category or task number is zero
    #[error("task key {0:?} has a zero category or task number")]
    ZeroComponent(String),
}

/// Result of a lookup for a key that is not registered.
///
/// This is an expected outcome: callers render an empty state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No entry registered under this key
    #[error("no study entry for task {key:?}")]
    NotFound {
        /// The requested key, as given
        key: String,
    },
}

/// A defect in the authored content.
///
/// Every variant names the key it concerns so a validation report can be
/// read without further context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Key does not conform to the task key format
    #[error("{key}: malformed key ({reason})")]
    MalformedKey {
        /// Key as authored
        key: String,
        /// Why it was rejected
        reason: KeyError,
    },

    /// Key defined more than once across the source tables
    #[error("{key}: duplicate key (first defined in table {first_table:?}, again in {duplicate_table:?})")]
    DuplicateKey {
        /// Duplicated key
        key: String,
        /// Table holding the definition that was kept
        first_table: String,
        /// Table holding the rejected definition
        duplicate_table: String,
    },

    /// Overview is empty or whitespace
    #[error("{key}: overview is empty")]
    EmptyOverview {
        /// Offending key
        key: String,
    },

    /// A sequence section has no items
    #[error("{key}: {section} has no items")]
    EmptySection {
        /// Offending key
        key: String,
        /// Which section
        section: Section,
    },

    /// A sequence item is empty or whitespace
    #[error("{key}: {section} item {index} is blank")]
    BlankItem {
        /// Offending key
        key: String,
        /// Which section
        section: Section,
        /// Zero-based position in the section
        index: usize,
    },
}

impl ValidationError {
    /// Key the defect concerns.
    pub fn key(&self) -> &str {
        match self {
            Self::MalformedKey { key, .. }
            | Self::DuplicateKey { key, .. }
            | Self::EmptyOverview { key }
            | Self::EmptySection { key, .. }
            | Self::BlankItem { key, .. } => key,
        }
    }
}
