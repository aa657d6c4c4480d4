//! Opponent move selection.
//!
//! Each difficulty tier maps to one `Strategy` variant:
//!
//! - `Random` (Easy): uniform choice among legal moves
//! - `Greedy` (Normal): best static score, first wins ties
//! - `Search` (Hard): best fixed-depth search value, first wins ties

use tracing::{debug, instrument};

use crate::board::Board;
use crate::core::{Difficulty, GameRng, Move, Side};

use super::config::OpponentConfig;
use super::eval::Heuristic;
use super::search::Searcher;
use super::stats::SearchStats;

/// Move selection algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Random,
    Greedy,
    Search,
}

impl From<Difficulty> for Strategy {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Normal => Strategy::Greedy,
            Difficulty::Hard => Strategy::Search,
        }
    }
}

/// Uniformly random legal move.
pub fn random_move(board: &Board, side: Side, rng: &mut GameRng) -> Option<Move> {
    let moves = board.valid_moves(side);
    rng.choose(&moves).copied()
}

/// Legal move with the strictly highest static score.
pub fn greedy_move(board: &Board, side: Side, heuristic: &Heuristic) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for mv in board.valid_moves(side) {
        let score = heuristic.score_move(mv, side);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

/// Select a move with default weights and search settings.
///
/// Returns `None` iff `side` has no legal move. Only Easy draws from `rng`.
pub fn select_move(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Option<Move> {
    let config = OpponentConfig::default();
    match Strategy::from(difficulty) {
        Strategy::Random => random_move(board, side, rng),
        Strategy::Greedy => greedy_move(board, side, &Heuristic::from(&config)),
        Strategy::Search => Searcher::new(&config).search(board, side),
    }
}

/// A computer opponent with a fixed difficulty.
///
/// Holds no game state between calls apart from its RNG and the
/// statistics of the last search.
#[derive(Clone, Debug)]
pub struct Opponent {
    difficulty: Difficulty,
    heuristic: Heuristic,
    searcher: Searcher,
    rng: GameRng,
}

impl Opponent {
    /// Create an opponent with default configuration.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_config(difficulty, &OpponentConfig::default())
    }

    /// Create an opponent with custom configuration.
    pub fn with_config(difficulty: Difficulty, config: &OpponentConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            difficulty,
            heuristic: Heuristic::from(config),
            searcher: Searcher::new(config),
            rng,
        }
    }

    /// Replace the RNG used by the Easy tier.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// The Easy tier's RNG, advanced by every random choice.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Statistics from the most recent Hard search.
    #[must_use]
    pub fn search_stats(&self) -> &SearchStats {
        self.searcher.stats()
    }

    /// Choose a move for `side`. Returns `None` iff it has no legal move.
    #[instrument(level = "debug", skip(self, board), fields(difficulty = %self.difficulty))]
    pub fn select_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        let choice = match Strategy::from(self.difficulty) {
            Strategy::Random => random_move(board, side, &mut self.rng),
            Strategy::Greedy => greedy_move(board, side, &self.heuristic),
            Strategy::Search => self.searcher.search(board, side),
        };
        debug!(?choice, "opponent move selected");
        choice
    }
}
