//! Content validation - checks authored entries against the data model rules.

use certprep_core::{is_blank, Section, StudyEntry, TaskKey, ValidationError};

/// Check a key against the task key format.
pub fn validate_key(key: &str) -> Option<ValidationError> {
    TaskKey::parse(key).err().map(|reason| ValidationError::MalformedKey {
        key: key.to_string(),
        reason,
    })
}

/// Check one entry, collecting every defect rather than stopping at the first.
pub fn validate_entry(key: &str, entry: &StudyEntry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(err) = validate_key(key) {
        errors.push(err);
    }

    if is_blank(&entry.overview) {
        errors.push(ValidationError::EmptyOverview { key: key.to_string() });
    }

    for section in Section::ALL {
        let items = entry.section(section);
        if items.is_empty() {
            errors.push(ValidationError::EmptySection {
                key: key.to_string(),
                section,
            });
            continue;
        }

        for (index, item) in items.iter().enumerate() {
            if is_blank(item) {
                errors.push(ValidationError::BlankItem {
                    key: key.to_string(),
                    section,
                    index,
                });
            }
        }
    }

    errors
}
