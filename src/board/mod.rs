//! Board engine.
//!
//! Owns the 8×8 grid, computes legal moves, applies moves with
//! directional capture, and reports score and game end. It knows nothing
//! about strategy or turn order.

pub mod grid;

pub use grid::{Board, MoveList, Score, DIRECTIONS, SIZE};
