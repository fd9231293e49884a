//! Content registry - the immutable task key to study entry mapping.

use certprep_core::{LookupError, StudyEntry, TaskKey, ValidationError};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

use crate::content;
use crate::table::ContentTable;
use crate::validation;

/// One registered entry together with where it came from.
#[derive(Debug, Clone)]
struct Slot {
    raw_key: String,
    key: Option<TaskKey>,
    entry: StudyEntry,
}

/// Read-only registry of study entries.
///
/// Built once from one or more content tables and never mutated afterwards.
/// It holds no interior mutability, so a shared reference can be handed to
/// any number of threads.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    /// Entries in merge order
    slots: Vec<Slot>,

    /// Raw key -> position in `slots`
    index: HashMap<String, usize>,

    /// Duplicate definitions seen while merging
    merge_defects: Vec<ValidationError>,
}

impl ContentRegistry {
    /// Registry over the built-in content tables.
    pub fn builtin() -> Self {
        Self::from_tables(&content::builtin_tables())
    }

    /// Merge tables into one flat registry.
    ///
    /// When a key is defined more than once, the first definition is kept and
    /// every later one is recorded as a duplicate for [`validate`](Self::validate)
    /// to report.
    pub fn from_tables(tables: &[ContentTable<'_>]) -> Self {
        let mut slots: Vec<Slot> = Vec::new();
        let mut index = HashMap::new();
        let mut origin: HashMap<String, String> = HashMap::new();
        let mut merge_defects = Vec::new();

        for table in tables {
            for raw in table.entries {
                if let Some(first_table) = origin.get(raw.key) {
                    warn!(key = raw.key, first_table = %first_table, table = table.name, "Duplicate task key");
                    merge_defects.push(ValidationError::DuplicateKey {
                        key: raw.key.to_string(),
                        first_table: first_table.clone(),
                        duplicate_table: table.name.to_string(),
                    });
                    continue;
                }

                origin.insert(raw.key.to_string(), table.name.to_string());
                index.insert(raw.key.to_string(), slots.len());
                slots.push(Slot {
                    raw_key: raw.key.to_string(),
                    key: TaskKey::parse(raw.key).ok(),
                    entry: raw.to_entry(),
                });
            }
        }

        debug!(
            tables = tables.len(),
            entries = slots.len(),
            duplicates = merge_defects.len(),
            "Built content registry"
        );

        Self {
            slots,
            index,
            merge_defects,
        }
    }

    /// Look up an entry.
    ///
    /// The key does not need to be well formed; anything not registered is
    /// [`LookupError::NotFound`].
    pub fn get(&self, key: &str) -> Result<&StudyEntry, LookupError> {
        self.index
            .get(key)
            .map(|&i| &self.slots[i].entry)
            .ok_or_else(|| LookupError::NotFound { key: key.to_string() })
    }

    /// Whether an entry is registered under `key`.
    pub fn has(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in one category, in ascending task order.
    ///
    /// `category` is the prefix as written in keys, e.g. `"5"`. An unknown
    /// category gives an empty list.
    pub fn keys_for_category(&self, category: &str) -> Vec<TaskKey> {
        let mut keys: Vec<TaskKey> = self
            .slots
            .iter()
            .filter_map(|s| s.key.as_ref())
            .filter(|k| k.category_prefix() == category)
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    /// Every well-formed key, in numeric order.
    pub fn keys(&self) -> Vec<TaskKey> {
        let mut keys: Vec<TaskKey> = self.slots.iter().filter_map(|s| s.key.clone()).collect();
        keys.sort();
        keys
    }

    /// Distinct category numbers, ascending.
    pub fn categories(&self) -> Vec<u32> {
        self.slots
            .iter()
            .filter_map(|s| s.key.as_ref().map(TaskKey::category))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Entries in merge order, with their keys as authored.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudyEntry)> {
        self.slots.iter().map(|s| (s.raw_key.as_str(), &s.entry))
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check every entry and key, returning all defects found.
    ///
    /// An empty result means the registry is fully conformant. Per-entry
    /// defects come first, in merge order, followed by duplicate keys.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = self
            .slots
            .iter()
            .flat_map(|s| validation::validate_entry(&s.raw_key, &s.entry))
            .collect();
        errors.extend(self.merge_defects.iter().cloned());

        debug!(entries = self.slots.len(), defects = errors.len(), "Validated content");
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawEntry;
    use certprep_core::Section;

    const ALPHA: &[RawEntry<'static>] = &[
        RawEntry {
            key: "5-10",
            overview: "Ten",
            study_guide: &["g"],
            pro_tips: &["t"],
            references: &["r"],
        },
        RawEntry {
            key: "5-02",
            overview: "Two",
            study_guide: &["g"],
            pro_tips: &["t"],
            references: &["r"],
        },
        RawEntry {
            key: "6-01",
            overview: "Six one",
            study_guide: &["g"],
            pro_tips: &["t"],
            references: &["r"],
        },
    ];

    const BETA: &[RawEntry<'static>] = &[
        RawEntry {
            key: "15-01",
            overview: "Fifteen",
            study_guide: &["g"],
            pro_tips: &["t"],
            references: &["r"],
        },
        RawEntry {
            key: "5-02",
            overview: "Second definition",
            study_guide: &["g"],
            pro_tips: &["t"],
            references: &["r"],
        },
    ];

    fn registry() -> ContentRegistry {
        ContentRegistry::from_tables(&[ContentTable::new("alpha", ALPHA)])
    }

    #[test]
    fn test_get_and_has() {
        let reg = registry();
        assert_eq!(reg.len(), 3);
        assert!(reg.has("5-10"));
        assert_eq!(reg.get("5-10").unwrap().overview, "Ten");

        assert!(!reg.has("5-99"));
        assert_eq!(
            reg.get("5-99"),
            Err(LookupError::NotFound { key: "5-99".to_string() })
        );
        assert!(reg.get("not a key").is_err());
    }

    #[test]
    fn test_keys_for_category_numeric_order() {
        let reg = registry();
        let keys: Vec<String> = reg.keys_for_category("5").iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["5-02", "5-10"]);

        assert!(reg.keys_for_category("7").is_empty());
        assert!(reg.keys_for_category("05").is_empty());
        assert!(reg.keys_for_category("").is_empty());
    }

    #[test]
    fn test_category_prefix_is_exact() {
        let reg = ContentRegistry::from_tables(&[
            ContentTable::new("alpha", ALPHA),
            ContentTable::new("beta", &BETA[..1]),
        ]);
        let keys: Vec<String> = reg.keys_for_category("5").iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["5-02", "5-10"]);
        assert_eq!(reg.keys_for_category("15").len(), 1);
        assert_eq!(reg.categories(), vec![5, 6, 15]);
    }

    #[test]
    fn test_duplicate_across_tables_is_reported_not_overwritten() {
        let reg = ContentRegistry::from_tables(&[
            ContentTable::new("alpha", ALPHA),
            ContentTable::new("beta", BETA),
        ]);

        assert_eq!(reg.len(), 4);
        assert_eq!(reg.get("5-02").unwrap().overview, "Two");

        let errors = reg.validate();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateKey {
                key: "5-02".to_string(),
                first_table: "alpha".to_string(),
                duplicate_table: "beta".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_within_one_table() {
        let entries = [ALPHA[0], ALPHA[0]];
        let reg = ContentRegistry::from_tables(&[ContentTable::new("solo", &entries)]);
        let errors = reg.validate();
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ValidationError::DuplicateKey { key, .. } if key == "5-10"));
    }

    #[test]
    fn test_validate_reports_bad_entries() {
        let mut entries = ALPHA.to_vec();
        entries[1].references = &[];
        entries.push(RawEntry {
            key: "6-2",
            overview: "Bad key",
            study_guide: &["g"],
            pro_tips: &["t"],
            references: &["r"],
        });

        let reg = ContentRegistry::from_tables(&[ContentTable::new("alpha", &entries)]);
        let errors = reg.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            ValidationError::EmptySection {
                key: "5-02".to_string(),
                section: Section::References,
            }
        );
        assert!(matches!(&errors[1], ValidationError::MalformedKey { key, .. } if key == "6-2"));

        // Malformed keys stay retrievable but are left out of key listings.
        assert!(reg.has("6-2"));
        assert_eq!(reg.keys_for_category("6").len(), 1);
    }

    #[test]
    fn test_iter_in_merge_order() {
        let reg = registry();
        let keys: Vec<&str> = reg.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["5-10", "5-02", "6-01"]);

        let sorted: Vec<String> = reg.keys().iter().map(|k| k.to_string()).collect();
        assert_eq!(sorted, vec!["5-02", "5-10", "6-01"]);
    }

    #[test]
    fn test_empty_registry() {
        let reg = ContentRegistry::from_tables(&[]);
        assert!(reg.is_empty());
        assert!(reg.validate().is_empty());
        assert!(reg.categories().is_empty());
    }
}
