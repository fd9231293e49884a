//! Content Repository
//!
//! The study content catalog: literal content tables, the registry built
//! from them, validation of authored entries and text search.

#![warn(missing_docs)]

pub mod content;
pub mod registry;
pub mod search;
pub mod table;
pub mod validation;

pub use registry::ContentRegistry;
pub use search::SearchHit;
pub use table::{ContentTable, RawEntry};
