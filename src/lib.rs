//! # rust-othello
//!
//! An Othello board engine with a tiered computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Infallible core**: a rejected move is `false`, a missing move is
//!    `None`. Errors exist only at the session boundary.
//!
//! 2. **Stateless opponent**: move selection is a function of the board
//!    and the side to move, plus an injected RNG for the Easy tier.
//!
//! 3. **Explicit turn order**: the board never advances the turn. Passes
//!    and game end are resolved by `rules::next_turn`.
//!
//! ## Modules
//!
//! - `core`: sides, cells, moves, difficulty and mode tags, RNG
//! - `board`: the 8×8 grid, legal moves, capture, score
//! - `rules`: turn order, forced passes, game result
//! - `ai`: Easy / Normal / Hard move selection
//! - `session`: snapshot shape, keyed store, turn orchestration
//! - `error`: boundary error types

pub mod core;
pub mod board;
pub mod rules;
pub mod ai;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Cell, Difficulty, GameMode, GameRng, GameRngState, Move, Side};

pub use crate::board::{Board, MoveList, Score};

pub use crate::rules::{next_turn, turn_for, GameResult, TurnState};

pub use crate::ai::{
    select_move, Heuristic, Opponent, OpponentConfig, SearchMode, SearchStats, Searcher, Strategy,
};

pub use crate::session::{EncodedStore, GameService, GameSnapshot, GameStore, InMemoryStore};

pub use crate::error::{ParseError, SessionError, SnapshotError};
