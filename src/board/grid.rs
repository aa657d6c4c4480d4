//! The 8×8 Othello board.
//!
//! ## Coordinates
//!
//! Rows and columns run `0..8`, row-major. Engine entry points take `i32`
//! coordinates so that anything off the board is an ordinary invalid
//! move rather than a panic.
//!
//! ## Capture
//!
//! A placement captures along each of the eight compass rays that holds
//! one or more opposing discs and then ends on a disc of the mover. Every
//! ray is decided against the board as it was before the placement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::core::{Cell, Move, Side};
use crate::error::ParseError;

/// Side length of the board.
pub const SIZE: usize = 8;

/// The eight compass directions as `(dx, dy)` row and column steps.
#[rustfmt::skip]
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Legal moves in row-major order. Rarely more than 32.
pub type MoveList = SmallVec<[Move; 32]>;

/// Disc counts per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub first: u32,
    pub second: u32,
}

impl Score {
    /// Discs held by `side`.
    #[must_use]
    pub const fn of(self, side: Side) -> u32 {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Side with strictly more discs, `None` on a tie.
    #[must_use]
    pub fn leader(self) -> Option<Side> {
        match self.first.cmp(&self.second) {
            std::cmp::Ordering::Greater => Some(Side::First),
            std::cmp::Ordering::Less => Some(Side::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// An Othello board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with the standard starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[3][3] = Cell::Occupied(Side::Second);
        cells[3][4] = Cell::Occupied(Side::First);
        cells[4][3] = Cell::Occupied(Side::First);
        cells[4][4] = Cell::Occupied(Side::Second);
        Self { cells }
    }

    /// Create a board with no discs at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Create a board from an explicit grid.
    #[must_use]
    pub const fn from_grid(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Copy out the grid.
    #[must_use]
    pub const fn grid(&self) -> [[Cell; SIZE]; SIZE] {
        self.cells
    }

    /// Get the cell at `(row, col)`. Panics if off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Set the cell at `(row, col)` without any capture. Panics if off the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Get the cell at signed coordinates, `None` if off the board.
    #[must_use]
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        Move::try_new(row, col).map(|mv| self.at(mv))
    }

    /// Get the cell under a move.
    #[must_use]
    pub fn at(&self, mv: Move) -> Cell {
        self.cells[mv.row as usize][mv.col as usize]
    }

    /// Would placing `side` at `(row, col)` capture along `(dx, dy)`?
    ///
    /// True iff the ray holds at least one opposing disc and then ends on
    /// an in-bounds disc of `side`. Running off the board or reaching an
    /// empty cell first never captures. An origin off the board, or a
    /// step that is not one of `DIRECTIONS`, never captures either.
    #[must_use]
    pub fn would_flip(&self, row: i32, col: i32, dx: i32, dy: i32, side: Side) -> bool {
        let unit = (-1..=1).contains(&dx) && (-1..=1).contains(&dy) && (dx, dy) != (0, 0);
        if !unit || Move::try_new(row, col).is_none() {
            return false;
        }

        let mut x = row + dx;
        let mut y = col + dy;
        let mut seen_opponent = false;

        while let Some(cell) = self.cell(x, y) {
            match cell {
                Cell::Empty => return false,
                Cell::Occupied(s) if s == side => return seen_opponent,
                Cell::Occupied(_) => seen_opponent = true,
            }
            x += dx;
            y += dy;
        }

        false
    }

    /// Is `(row, col)` a legal placement for `side`?
    #[must_use]
    pub fn is_valid_move(&self, row: i32, col: i32, side: Side) -> bool {
        match self.cell(row, col) {
            Some(Cell::Empty) => DIRECTIONS
                .iter()
                .any(|&(dx, dy)| self.would_flip(row, col, dx, dy, side)),
            _ => false,
        }
    }

    /// Place a disc for `side` and capture.
    ///
    /// Returns `false` and leaves the board untouched if the move is not
    /// legal.
    pub fn make_move(&mut self, row: i32, col: i32, side: Side) -> bool {
        if !self.is_valid_move(row, col, side) {
            return false;
        }

        let capturing: SmallVec<[(i32, i32); 8]> = DIRECTIONS
            .iter()
            .copied()
            .filter(|&(dx, dy)| self.would_flip(row, col, dx, dy, side))
            .collect();

        let own = Cell::Occupied(side);
        self.cells[row as usize][col as usize] = own;

        for (dx, dy) in capturing {
            let mut x = row + dx;
            let mut y = col + dy;
            // Terminates on the own disc found by `would_flip`; rays from
            // one origin never share cells.
            while self.cells[x as usize][y as usize] != own {
                self.cells[x as usize][y as usize] = own;
                x += dx;
                y += dy;
            }
        }

        true
    }

    /// Apply a move value. Same semantics as `make_move`.
    pub fn play(&mut self, mv: Move, side: Side) -> bool {
        self.make_move(i32::from(mv.row), i32::from(mv.col), side)
    }

    /// All legal moves for `side`, row-major.
    #[must_use]
    pub fn valid_moves(&self, side: Side) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..SIZE as i32 {
            for col in 0..SIZE as i32 {
                if self.is_valid_move(row, col, side) {
                    moves.push(Move::new(row as u8, col as u8));
                }
            }
        }
        moves
    }

    /// Does `side` have at least one legal move?
    #[must_use]
    pub fn has_moves(&self, side: Side) -> bool {
        (0..SIZE as i32).any(|row| (0..SIZE as i32).any(|col| self.is_valid_move(row, col, side)))
    }

    /// Disc counts per side.
    #[must_use]
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::Occupied(Side::First) => score.first += 1,
                Cell::Occupied(Side::Second) => score.second += 1,
                Cell::Empty => {}
            }
        }
        score
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> u32 {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count() as u32
    }

    /// True iff neither side has a legal move.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.has_moves(Side::First) && !self.has_moves(Side::Second)
    }

    /// Side with more discs once the game is over. `None` while play
    /// continues or on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if !self.is_game_over() {
            return None;
        }
        self.score().leader()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parse the `Display` form: eight lines of eight `B`, `W` or `.` characters.
/// Surrounding whitespace on each line is ignored.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != SIZE {
            return Err(ParseError::InvalidBoard(format!(
                "expected {SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (r, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != SIZE {
                return Err(ParseError::InvalidBoard(format!(
                    "row {r} has {} cells",
                    symbols.len()
                )));
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                board.cells[r][c] = match symbol {
                    '.' => Cell::Empty,
                    'B' => Cell::Occupied(Side::First),
                    'W' => Cell::Occupied(Side::Second),
                    other => {
                        return Err(ParseError::InvalidBoard(format!(
                            "unexpected symbol {other:?} at ({r}, {c})"
                        )))
                    }
                };
            }
        }
        Ok(board)
    }
}
