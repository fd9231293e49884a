//! Checks over the built-in content, run as the pre-release content gate.

use certprep_core::{LookupError, Section, TaskKey, ValidationError};
use certprep_knowledge::content::{builtin_tables, TEST_AND_POWER, WIRING_AND_BONDING};
use certprep_knowledge::{ContentRegistry, ContentTable};

#[test]
fn builtin_content_is_conformant() {
    let registry = ContentRegistry::builtin();
    let errors = registry.validate();
    assert!(
        errors.is_empty(),
        "content defects:\n{}",
        errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn every_registered_key_resolves_to_a_complete_entry() {
    let registry = ContentRegistry::builtin();
    assert!(!registry.is_empty());

    for (key, entry) in registry.iter() {
        assert!(TaskKey::parse(key).is_ok(), "{key} is malformed");
        assert!(registry.has(key));
        assert_eq!(registry.get(key).unwrap(), entry);
        assert!(entry.is_complete(), "{key} is incomplete");
    }
}

#[test]
fn unregistered_keys_are_not_found() {
    let registry = ContentRegistry::builtin();
    for key in ["5-99", "9-01", "05-01", "5-1", "", "6-04 "] {
        assert!(!registry.has(key));
        assert_eq!(
            registry.get(key),
            Err(LookupError::NotFound { key: key.to_string() })
        );
    }
}

#[test]
fn categories_partition_the_keys() {
    let registry = ContentRegistry::builtin();
    assert_eq!(registry.categories(), vec![5, 6, 7, 8]);

    let mut total = 0;
    for category in registry.categories() {
        let keys = registry.keys_for_category(&category.to_string());
        assert!(!keys.is_empty());
        assert!(keys.iter().all(|k| k.category() == category));
        assert!(keys.windows(2).all(|w| w[0].task() < w[1].task()));
        total += keys.len();
    }
    assert_eq!(total, registry.len());

    let six: Vec<String> = registry.keys_for_category("6").iter().map(|k| k.to_string()).collect();
    assert_eq!(six.first().map(String::as_str), Some("6-01"));
    assert!(six.contains(&"6-08".to_string()));

    assert!(registry.keys_for_category("42").is_empty());
}

#[test]
fn bonding_jumper_reference_is_verbatim() {
    let registry = ContentRegistry::builtin();
    let entry = registry.get("6-04").unwrap();
    assert!(entry
        .references
        .iter()
        .any(|r| r == "MIL-B-5087B — Bonding, Electrical, and Lightning Protection"));
}

#[test]
fn emptying_references_reports_exactly_that_key() {
    let mut first = WIRING_AND_BONDING.entries.to_vec();
    let target = first.iter_mut().find(|e| e.key == "5-01").unwrap();
    target.references = &[];

    let registry = ContentRegistry::from_tables(&[
        ContentTable::new(WIRING_AND_BONDING.name, &first),
        TEST_AND_POWER,
    ]);

    let errors = registry.validate();
    assert_eq!(
        errors,
        vec![ValidationError::EmptySection {
            key: "5-01".to_string(),
            section: Section::References,
        }]
    );
}

#[test]
fn merging_tables_twice_flags_every_key_as_duplicate() {
    let [wiring, power] = builtin_tables();
    let registry = ContentRegistry::from_tables(&[wiring, power, wiring]);

    assert_eq!(registry.len(), wiring.len() + power.len());

    let errors = registry.validate();
    assert_eq!(errors.len(), wiring.len());
    assert!(errors.iter().all(|e| matches!(e, ValidationError::DuplicateKey { .. })));
    assert!(errors.iter().any(|e| e.key() == "5-01"));
}

#[test]
fn search_finds_bonding_entries() {
    let registry = ContentRegistry::builtin();
    let hits = registry.search("bonding jumper", 5);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].key, "6-04");
}
