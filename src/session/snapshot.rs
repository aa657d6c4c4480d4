//! Game snapshot: the shape persisted and transmitted by the session layer.
//!
//! ```json
//! {
//!   "id": "g1",
//!   "board": [[null, "black", "white", ...], ...],
//!   "currentPlayer": "black",
//!   "mode": "cpu",
//!   "difficulty": "normal",
//!   "isGameOver": false,
//!   "winner": null,
//!   "lastMove": { "row": 2, "col": 3 }
//! }
//! ```
//!
//! `difficulty` and `lastMove` may be omitted on input.

use serde::{Deserialize, Serialize};

use crate::board::{Board, SIZE};
use crate::core::{Cell, Difficulty, GameMode, Move, Side};
use crate::error::SnapshotError;

/// Serializable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub id: String,
    /// Row-major grid. Kept as nested vectors so that malformed input can
    /// be reported instead of failing deserialization.
    pub board: Vec<Vec<Cell>>,
    pub current_player: Side,
    pub mode: GameMode,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    pub is_game_over: bool,
    pub winner: Option<Side>,
    #[serde(default)]
    pub last_move: Option<Move>,
}

impl GameSnapshot {
    /// A new game on the starting board with `Side::First` to move.
    pub fn new(id: impl Into<String>, mode: GameMode, difficulty: Option<Difficulty>) -> Self {
        let mut snapshot = Self {
            id: id.into(),
            board: Vec::new(),
            current_player: Side::First,
            mode,
            difficulty,
            is_game_over: false,
            winner: None,
            last_move: None,
        };
        snapshot.set_board(&Board::new());
        snapshot
    }

    /// Decode the grid into a board, checking its shape.
    pub fn board(&self) -> Result<Board, SnapshotError> {
        if self.board.len() != SIZE {
            return Err(SnapshotError::RowCount(self.board.len()));
        }
        let mut grid = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in self.board.iter().enumerate() {
            if row.len() != SIZE {
                return Err(SnapshotError::RowLength { row: r, len: row.len() });
            }
            grid[r].copy_from_slice(row);
        }
        Ok(Board::from_grid(grid))
    }

    /// Replace the grid with `board`.
    pub fn set_board(&mut self, board: &Board) {
        self.board = board.grid().iter().map(|row| row.to_vec()).collect();
    }

    /// Compact binary encoding for store backends.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode the output of `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
