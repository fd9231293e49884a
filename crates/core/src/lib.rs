//! certprep core data models.
//!
//! This crate defines the data structures shared by the content registry
//! and the progress badge: task keys, study entries, progress values and
//! the error types callers handle.

#![warn(missing_docs)]

// Identities
mod id;

// Content
mod entry;
mod error;

// Progress
mod progress;

// Re-exports
pub use id::{TaskKey, TASK_KEY_PATTERN};
pub use entry::{StudyEntry, Section, is_blank};
pub use error::{KeyError, LookupError, ValidationError};
pub use progress::ProgressState;
