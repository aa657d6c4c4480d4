//! Error types.
//!
//! Board operations never fail: a rejected move is `false` and a missing
//! move is `None`. These errors cover malformed input at the boundary and
//! session-level misuse.

use crate::core::Side;

/// Unknown wire tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown side: {0}")]
    UnknownSide(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("unknown game mode: {0}")]
    UnknownMode(String),

    #[error("invalid board text: {0}")]
    InvalidBoard(String),

    #[error("move ({row}, {col}) is off the board")]
    OffBoard { row: i32, col: i32 },
}

/// Snapshot shape or codec failure.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("board must have 8 rows, got {0}")]
    RowCount(usize),

    #[error("board row {row} must have 8 cells, got {len}")]
    RowLength { row: usize, len: usize },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Failure while processing a turn.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("game not found: {0}")]
    NotFound(String),

    #[error("game {0} is already over")]
    GameOver(String),

    #[error("it is not {side}'s turn")]
    NotYourTurn { side: Side },

    #[error("illegal move ({row}, {col}) for {side}")]
    IllegalMove { row: i32, col: i32, side: Side },

    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}
