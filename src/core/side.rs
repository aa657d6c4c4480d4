//! Sides, cells, and moves.
//!
//! ## Side
//!
//! The two competing colors. `First` moves first and is `"black"` on the
//! wire, `Second` is `"white"`.
//!
//! ## Cell
//!
//! Occupancy of one grid position. Serialized as a side name or `null`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Moves first.
    #[serde(rename = "black")]
    First,
    /// Moves second.
    #[serde(rename = "white")]
    Second,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Wire name of the side.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::First => "black",
            Side::Second => "white",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Side::First),
            "white" => Ok(Side::Second),
            other => Err(ParseError::UnknownSide(other.to_string())),
        }
    }
}

/// Occupancy of a single board position.
///
/// Serializes transparently as `Option<Side>`, so an empty cell is `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Side>", into = "Option<Side>")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Side),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying side, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }

    /// Single-character rendering: `B`, `W` or `.`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Side::First) => 'B',
            Cell::Occupied(Side::Second) => 'W',
        }
    }
}

impl From<Option<Side>> for Cell {
    fn from(side: Option<Side>) -> Self {
        side.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<Side> {
    fn from(cell: Cell) -> Self {
        cell.side()
    }
}

/// A board coordinate, both components in `0..8`.
///
/// Deserialization rejects coordinates off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

/// Unchecked wire form of `Move`.
#[derive(Deserialize)]
struct RawMove {
    row: u8,
    col: u8,
}

impl TryFrom<RawMove> for Move {
    type Error = ParseError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        let (row, col) = (i32::from(raw.row), i32::from(raw.col));
        Move::try_new(row, col).ok_or(ParseError::OffBoard { row, col })
    }
}

impl Move {
    /// Create a move. Panics if either coordinate is off the board.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "Move ({row}, {col}) is off the board");
        Self { row, col }
    }

    /// Create a move from signed coordinates, `None` if off the board.
    #[must_use]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// True for the four corner squares.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == 7) && (self.col == 0 || self.col == 7)
    }

    /// True for any square on the outer ring, corners included.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        self.row == 0 || self.row == 7 || self.col == 0 || self.col == 7
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
