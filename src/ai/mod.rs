//! Computer opponent.
//!
//! Given a board and a side to move, selects one legal move for a
//! difficulty tier. The opponent never mutates the caller's board; the
//! Normal and Hard tiers work on copies.
//!
//! ## Components
//!
//! - `OpponentConfig`: weights, search depth and mode, RNG seed
//! - `Heuristic`: static move evaluation (corner, edge, opponent mobility)
//! - `Searcher`: fixed-depth search for the Hard tier
//! - `Opponent`: difficulty dispatch

pub mod config;
pub mod eval;
pub mod search;
pub mod stats;
pub mod strategy;

pub use config::{OpponentConfig, SearchMode};
pub use eval::Heuristic;
pub use search::Searcher;
pub use stats::SearchStats;
pub use strategy::{greedy_move, random_move, select_move, Opponent, Strategy};
