//! Turn rules.
//!
//! Decides who moves after each placement, including forced passes, and
//! turns a finished board into a `GameResult`. The board engine itself
//! never advances the turn.

pub mod turn;

pub use turn::{next_turn, turn_for, GameResult, TurnState};
