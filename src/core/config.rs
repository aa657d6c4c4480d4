//! Game configuration tags.
//!
//! - `Difficulty`: selects the opponent algorithm
//! - `GameMode`: whether the second side is played by the machine
//!
//! Both parse from and serialize to their lowercase wire names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Opponent difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Greedy one-ply heuristic.
    #[default]
    Normal,
    /// Fixed-depth search.
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Who plays the second side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Human plays `Side::First`, the machine replies as `Side::Second`.
    #[default]
    #[serde(rename = "cpu")]
    Cpu,
    /// Two humans share the board.
    #[serde(rename = "vs")]
    Versus,
}

impl GameMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::Cpu => "cpu",
            GameMode::Versus => "vs",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpu" => Ok(GameMode::Cpu),
            "vs" => Ok(GameMode::Versus),
            other => Err(ParseError::UnknownMode(other.to_string())),
        }
    }
}
