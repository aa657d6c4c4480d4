//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one Hard search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Root candidates searched.
    pub root_moves: u32,

    /// Interior nodes visited.
    pub nodes: u64,

    /// Static evaluations performed at the leaves.
    pub leaf_evaluations: u64,

    /// Subtrees skipped by alpha-beta cutoffs.
    pub cutoffs: u64,

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

    /// Leaf evaluations per second.
    #[must_use]
    pub fn evaluations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.leaf_evaluations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
