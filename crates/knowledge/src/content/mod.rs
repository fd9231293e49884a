//! Built-in study content.
//!
//! Each module holds one literal table covering a range of categories.

mod power;
mod wiring;

pub use power::TEST_AND_POWER;
pub use wiring::WIRING_AND_BONDING;

use crate::table::ContentTable;

/// All built-in tables, in merge order.
pub fn builtin_tables() -> [ContentTable<'static>; 2] {
    [WIRING_AND_BONDING, TEST_AND_POWER]
}
