//! Core types: sides, cells, moves, configuration tags, RNG.
//!
//! These are shared by the board engine, the opponent, and the session
//! layer, and carry the wire names used at the crate boundary.

pub mod side;
pub mod config;
pub mod rng;

pub use side::{Cell, Move, Side};
pub use config::{Difficulty, GameMode};
pub use rng::{GameRng, GameRngState};
