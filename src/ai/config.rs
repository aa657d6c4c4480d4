//! Opponent configuration parameters.

use serde::{Deserialize, Serialize};

/// How the Hard tier explores below the root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Conventional minimax over successor positions.
    ///
    /// Each candidate is applied to a copy of the board and roles alternate
    /// between the searching side and its opponent. A side without a move
    /// passes.
    #[default]
    Minimax,

    /// Behavioral parity with the legacy engine.
    ///
    /// Every ply re-queries legal moves from the unmodified root board and
    /// only the leaf move is evaluated, so every root candidate gets the
    /// same value whenever depth is above zero.
    Legacy,
}

/// Opponent configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Plies searched below each root candidate by the Hard tier.
    pub depth: u32,

    /// Bonus for a move onto a corner square.
    pub corner_bonus: i32,

    /// Bonus for a move onto any edge square, corners included.
    pub edge_bonus: i32,

    /// Penalty per legal reply left to the opponent.
    pub mobility_penalty: i32,

    /// Hard tier search mode.
    pub search: SearchMode,

    /// Seed for the Easy tier RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            corner_bonus: 100,
            edge_bonus: 10,
            mobility_penalty: 5,
            search: SearchMode::Minimax,
            seed: None,
        }
    }
}

impl OpponentConfig {
    /// Create a new config with a custom search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a custom search mode.
    pub fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }

    /// Create a new config with a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with custom heuristic weights.
    pub fn with_weights(mut self, corner: i32, edge: i32, mobility: i32) -> Self {
        self.corner_bonus = corner;
        self.edge_bonus = edge;
        self.mobility_penalty = mobility;
        self
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
