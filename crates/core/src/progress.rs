//! Progress values handed to the badge renderer.

use serde::{Deserialize, Serialize};

/// Experience and level, computed and persisted by the caller.
///
/// No relationship between the two is enforced here. `level` is expected to
/// be at least 1; a zero level is a caller bug, not a checked condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgressState {
    /// Experience points
    pub xp: u64,

    /// Current level (1-based)
    pub level: u32,
}

impl ProgressState {
    /// Create a progress state.
    pub fn new(xp: u64, level: u32) -> Self {
        Self { xp, level }
    }
}
