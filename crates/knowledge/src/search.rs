//! Text search over registered entries.

use certprep_core::{StudyEntry, TaskKey};

use crate::registry::ContentRegistry;

/// A search result.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    /// Key as registered
    pub key: &'a str,

    /// The matching entry
    pub entry: &'a StudyEntry,

    /// Relevance score, higher is better
    pub score: f64,
}

impl ContentRegistry {
    /// Case-insensitive search across overview, study guide, tips and
    /// references.
    ///
    /// Results are ordered by score, then by key. A blank query matches
    /// nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .iter()
            .map(|(key, entry)| SearchHit {
                key,
                entry,
                score: relevance_score(entry, &query_lower),
            })
            .filter(|hit| hit.score > 0.0)
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| compare_keys(a.key, b.key))
        });
        hits.truncate(limit);
        hits
    }
}

/// Score an entry against an already lowercased query.
fn relevance_score(entry: &StudyEntry, query_lower: &str) -> f64 {
    let mut score = 0.0;

    // Overview (highest weight)
    if entry.overview.to_lowercase().contains(query_lower) {
        score += 10.0;
    }

    for item in &entry.study_guide {
        if item.to_lowercase().contains(query_lower) {
            score += 5.0;
        }
    }

    for tip in &entry.pro_tips {
        if tip.to_lowercase().contains(query_lower) {
            score += 4.0;
        }
    }

    // References (lowest weight)
    for reference in &entry.references {
        if reference.to_lowercase().contains(query_lower) {
            score += 3.0;
        }
    }

    score
}

/// Numeric key order, with malformed keys after well-formed ones.
fn compare_keys(a: &str, b: &str) -> std::cmp::Ordering {
    match (TaskKey::parse(a), TaskKey::parse(b)) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ContentTable, RawEntry};

    const ENTRIES: &[RawEntry<'static>] = &[
        RawEntry {
            key: "7-10",
            overview: "Battery charging",
            study_guide: &["Vent hydrogen"],
            pro_tips: &["Wear a face shield"],
            references: &["AC 00-33B"],
        },
        RawEntry {
            key: "7-02",
            overview: "Bonding jumpers",
            study_guide: &["Measure the battery bond", "Check the battery strap"],
            pro_tips: &["Cycle the surface"],
            references: &["MIL-B-5087B"],
        },
        RawEntry {
            key: "7-03",
            overview: "Connectors",
            study_guide: &["Seal unused cavities"],
            pro_tips: &["Cap connectors"],
            references: &["MIL-DTL-38999"],
        },
    ];

    fn registry() -> ContentRegistry {
        ContentRegistry::from_tables(&[ContentTable::new("test", ENTRIES)])
    }

    #[test]
    fn test_overview_outweighs_single_guide_match() {
        let reg = registry();
        let hits = reg.search("BATTERY", 10);
        let keys: Vec<&str> = hits.iter().map(|h| h.key).collect();
        // 7-02 has two guide matches (10.0), 7-10 an overview match (10.0);
        // equal scores fall back to key order.
        assert_eq!(keys, vec!["7-02", "7-10"]);
        assert_eq!(hits[0].score, hits[1].score);
    }

    #[test]
    fn test_reference_search() {
        let reg = registry();
        let hits = reg.search("mil-b-5087b", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "7-02");
        assert_eq!(hits[0].score, 3.0);
    }

    #[test]
    fn test_limit_and_blank_query() {
        let reg = registry();
        assert_eq!(reg.search("battery", 1).len(), 1);
        assert!(reg.search("   ", 10).is_empty());
        assert!(reg.search("hydraulic", 10).is_empty());
    }

    #[test]
    fn test_compare_keys() {
        use std::cmp::Ordering;
        assert_eq!(compare_keys("5-02", "5-10"), Ordering::Less);
        assert_eq!(compare_keys("10-01", "9-01"), Ordering::Greater);
        assert_eq!(compare_keys("bad", "5-01"), Ordering::Greater);
    }
}
