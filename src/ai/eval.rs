//! Static move evaluation shared by the Normal and Hard tiers.
//!
//! A move scores its placement bonus (corner, edge) minus a penalty for
//! every legal reply it leaves the opponent. Corners are edges too, so a
//! corner collects both bonuses.

use crate::board::Board;
use crate::core::{Move, Side};

use super::config::OpponentConfig;

/// Placement and mobility weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heuristic {
    pub corner_bonus: i32,
    pub edge_bonus: i32,
    pub mobility_penalty: i32,
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::from(&OpponentConfig::default())
    }
}

impl From<&OpponentConfig> for Heuristic {
    fn from(config: &OpponentConfig) -> Self {
        Self {
            corner_bonus: config.corner_bonus,
            edge_bonus: config.edge_bonus,
            mobility_penalty: config.mobility_penalty,
        }
    }
}

impl Heuristic {
    /// Bonus for the destination square alone.
    #[must_use]
    pub fn placement_bonus(&self, mv: Move) -> i32 {
        let mut bonus = 0;
        if mv.is_corner() {
            bonus += self.corner_bonus;
        }
        if mv.is_edge() {
            bonus += self.edge_bonus;
        }
        bonus
    }

    /// Score `mv` for `side` with mobility measured on a fresh board.
    ///
    /// The replies are counted after playing `mv` on a new starting board,
    /// not on the game position. If `mv` is not legal there, the replies
    /// are counted on the untouched starting board.
    #[must_use]
    pub fn score_move(&self, mv: Move, side: Side) -> i32 {
        self.score_move_in(&Board::new(), mv, side)
    }

    /// Score `mv` for `side` with mobility measured after playing it on
    /// `board`.
    #[must_use]
    pub fn score_move_in(&self, board: &Board, mv: Move, side: Side) -> i32 {
        let mut next = *board;
        next.play(mv, side);
        let replies = next.valid_moves(side.opponent()).len() as i32;
        self.placement_bonus(mv) - self.mobility_penalty * replies
    }
}
