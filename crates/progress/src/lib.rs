//! Progress Badge
//!
//! Renders experience and level values computed elsewhere.

#![warn(missing_docs)]

pub mod badge;
pub mod format;

pub use badge::{ProgressBadge, BadgeView};
pub use format::{NumberLocale, UnknownLocale};
