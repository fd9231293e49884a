//! Task keys - the `"<category>-<task>"` identifiers addressing study entries.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::KeyError;

/// Pattern every registered key must match.
pub const TASK_KEY_PATTERN: &str = r"^[0-9]+-[0-9]{2}$";

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TASK_KEY_PATTERN).expect("task key pattern is a valid regex"))
}

/// Identifier of one study entry, e.g. `5-01`.
///
/// The category is a positive integer without leading zeros and the task is
/// a two-digit, zero-padded positive integer. Keys order numerically by
/// `(category, task)`, so `10-01` sorts after `9-12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskKey {
    raw: String,
    category: u32,
    task: u32,
}

impl TaskKey {
    /// Parse and check a key.
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        if !key_regex().is_match(s) {
            return Err(KeyError::Malformed(s.to_string()));
        }

        // The pattern guarantees exactly one '-'.
        let (category_str, task_str) = s.split_once('-').ok_or_else(|| KeyError::Malformed(s.to_string()))?;

        if category_str.len() > 1 && category_str.starts_with('0') {
            return Err(KeyError::LeadingZero(s.to_string()));
        }

        let category: u32 = category_str
            .parse()
            .map_err(|_| KeyError::Malformed(s.to_string()))?;
        let task: u32 = task_str
            .parse()
            .map_err(|_| KeyError::Malformed(s.to_string()))?;

        if category == 0 || task == 0 {
            return Err(KeyError::ZeroComponent(s.to_string()));
        }

        Ok(Self {
            raw: s.to_string(),
            category,
            task,
        })
    }

    /// Category number (the part before the dash).
    pub fn category(&self) -> u32 {
        self.category
    }

    /// Task number within the category.
    pub fn task(&self) -> u32 {
        self.task
    }

    /// Category prefix as it appears in the key, e.g. `"5"`.
    pub fn category_prefix(&self) -> &str {
        self.raw.split_once('-').map(|(c, _)| c).unwrap_or(&self.raw)
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialOrd for TaskKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TaskKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.category, self.task).cmp(&(other.category, other.task))
    }
}

impl std::fmt::Display for TaskKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.raw)
    }
}

impl std::str::FromStr for TaskKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaskKey {
    type Error = KeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TaskKey> for String {
    fn from(key: TaskKey) -> Self {
        key.raw
    }
}

impl AsRef<str> for TaskKey {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_keys() {
        let key = TaskKey::parse("5-01").unwrap();
        assert_eq!(key.category(), 5);
        assert_eq!(key.task(), 1);
        assert_eq!(key.category_prefix(), "5");
        assert_eq!(key.to_string(), "5-01");
        assert_eq!(format!("{key:>5}"), " 5-01");

        let key: TaskKey = "12-34".parse().unwrap();
        assert_eq!(key.category(), 12);
        assert_eq!(key.task(), 34);
    }

    #[test]
    fn test_parse_rejects_pattern_violations() {
        for bad in ["5-1", "5-001", "a-01", "5_01", "", "-01", "5-", " 5-01", "5-01 "] {
            assert!(
                matches!(TaskKey::parse(bad), Err(KeyError::Malformed(_))),
                "expected {bad:?} to be malformed"
            );
        }
    }

    #[test]
    fn test_parse_rejects_leading_zero_and_zero_parts() {
        assert!(matches!(TaskKey::parse("05-01"), Err(KeyError::LeadingZero(_))));
        assert!(matches!(TaskKey::parse("0-01"), Err(KeyError::ZeroComponent(_))));
        assert!(matches!(TaskKey::parse("5-00"), Err(KeyError::ZeroComponent(_))));
    }

    #[test]
    fn test_numeric_ordering() {
        let mut keys: Vec<TaskKey> = ["10-01", "5-10", "5-02", "9-12"]
            .iter()
            .map(|s| TaskKey::parse(s).unwrap())
            .collect();
        keys.sort();

        let ordered: Vec<&str> = keys.iter().map(TaskKey::as_str).collect();
        assert_eq!(ordered, vec!["5-02", "5-10", "9-12", "10-01"]);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let key = TaskKey::parse("6-04").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"6-04\"");

        let back: TaskKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);

        assert!(serde_json::from_str::<TaskKey>("\"6-4\"").is_err());
    }
}
