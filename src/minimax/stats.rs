//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `find_best_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Moves whose outcome was computed.
    pub nodes_evaluated: u64,

    /// Moves that ended the game (win or draw).
    pub terminal_leaves: u64,

    /// Moves scored by the heuristic at the depth cutoff.
    pub heuristic_leaves: u64,

    /// Deepest ply reached (0 = top-level candidates).
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record_node(&mut self, depth: u32) {
        self.nodes_evaluated += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_evaluated as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
