//! Turn order and game result.
//!
//! The board engine never advances the turn. After every placement the
//! caller asks `next_turn` who moves next:
//!
//! - the opponent of the last mover, if it has a legal move
//! - otherwise the last mover again (the opponent passes)
//! - otherwise nobody, and the game is over

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Side;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Side with more discs.
    Winner(Side),
    /// Equal disc counts.
    Draw,
}

impl GameResult {
    /// Result of a finished board. Callers check `is_game_over` first.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        board
            .score()
            .leader()
            .map_or(GameResult::Draw, GameResult::Winner)
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    /// The winning side, `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Winner(side) => Some(*side),
            GameResult::Draw => None,
        }
    }
}

/// Who acts next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Normal turn for this side.
    Move(Side),
    /// The other side has no move; this side moves again.
    Pass(Side),
    /// Neither side can move.
    Over(GameResult),
}

impl TurnState {
    /// The side to move, if the game continues.
    #[must_use]
    pub fn side_to_move(&self) -> Option<Side> {
        match self {
            TurnState::Move(side) | TurnState::Pass(side) => Some(*side),
            TurnState::Over(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, TurnState::Over(_))
    }
}

/// Resolve who moves after `last` has played on `board`.
#[must_use]
pub fn next_turn(board: &Board, last: Side) -> TurnState {
    let opponent = last.opponent();
    if board.has_moves(opponent) {
        TurnState::Move(opponent)
    } else if board.has_moves(last) {
        TurnState::Pass(last)
    } else {
        TurnState::Over(GameResult::of(board))
    }
}

/// Resolve whose turn it is when `side` is nominally due to move.
///
/// Used when loading a position where the side to move may have to pass.
/// A blocked `side` yields `Pass` for the opponent, exactly as if `side`
/// had just been skipped by `next_turn`.
#[must_use]
pub fn turn_for(board: &Board, side: Side) -> TurnState {
    if board.has_moves(side) {
        TurnState::Move(side)
    } else {
        next_turn(board, side.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Side::Second);
        assert!(!result.is_winner(Side::First));
        assert!(result.is_winner(Side::Second));
        assert_eq!(result.winner(), Some(Side::Second));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Side::First));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_next_turn_alternates() {
        let mut board = Board::new();
        assert!(board.make_move(2, 3, Side::First));
        assert_eq!(next_turn(&board, Side::First), TurnState::Move(Side::Second));
    }

    #[test]
    fn test_next_turn_forced_pass() {
        // Second has no move anywhere; First can still play at (0,2).
        let board: Board = "
            BW......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(!board.has_moves(Side::Second));
        assert!(board.has_moves(Side::First));

        let turn = next_turn(&board, Side::First);
        assert_eq!(turn, TurnState::Pass(Side::First));
        assert_eq!(turn.side_to_move(), Some(Side::First));
    }

    #[test]
    fn test_next_turn_over() {
        let board: Board = "
            BB......
            ........
            ........
            ........
            ........
            ........
            ........
            .......W"
            .parse()
            .unwrap();
        let turn = next_turn(&board, Side::Second);
        assert_eq!(turn, TurnState::Over(GameResult::Winner(Side::First)));
        assert!(turn.is_over());
        assert_eq!(turn.side_to_move(), None);
    }

    #[test]
    fn test_turn_for_skips_blocked_side() {
        let board: Board = "
            BW......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert_eq!(turn_for(&board, Side::Second), TurnState::Pass(Side::First));
        assert_eq!(turn_for(&board, Side::First), TurnState::Move(Side::First));
        assert_eq!(turn_for(&board, Side::Second).side_to_move(), Some(Side::First));
    }
}
