//! Fixed-depth search for the Hard tier.
//!
//! Every root candidate is searched with a full window and the first
//! candidate with the strictly highest value is chosen. Below the root,
//! `SearchMode::Minimax` uses alpha-beta over real successor positions and
//! `SearchMode::Legacy` replays the legacy engine's stateless recursion.

use std::time::Instant;

use tracing::trace;

use crate::board::Board;
use crate::core::{Move, Side};
use crate::rules::{next_turn, TurnState};

use super::config::{OpponentConfig, SearchMode};
use super::eval::Heuristic;
use super::stats::SearchStats;

/// Value of a won position before the disc margin is added. Larger than
/// any heuristic score.
const WIN_SCORE: i32 = 1_000_000;

/// Hard tier search context.
#[derive(Clone, Debug)]
pub struct Searcher {
    heuristic: Heuristic,
    depth: u32,
    mode: SearchMode,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher from opponent configuration.
    pub fn new(config: &OpponentConfig) -> Self {
        Self {
            heuristic: Heuristic::from(config),
            depth: config.depth,
            mode: config.search,
            stats: SearchStats::default(),
        }
    }

    /// Statistics from the last call to `search`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best move for `side`, `None` if it has no legal move.
    pub fn search(&mut self, board: &Board, side: Side) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();

        let mut best: Option<(Move, i32)> = None;
        for mv in board.valid_moves(side) {
            let value = self.root_value(board, mv, side);
            self.stats.root_moves += 1;
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            mode = ?self.mode,
            root_moves = self.stats.root_moves,
            nodes = self.stats.nodes,
            leaves = self.stats.leaf_evaluations,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "search finished"
        );

        best.map(|(mv, _)| mv)
    }

    /// Search value of one root candidate.
    pub fn root_value(&mut self, board: &Board, mv: Move, side: Side) -> i32 {
        match self.mode {
            SearchMode::Minimax => self.minimax(board, mv, side, self.depth, i32::MIN, i32::MAX, side),
            SearchMode::Legacy => self.legacy(board, mv, self.depth, false, side),
        }
    }

    // =========================================================================
    // Minimax
    // =========================================================================

    /// Value for `root` of `mover` playing `mv` on `board`.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &Board,
        mv: Move,
        mover: Side,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        root: Side,
    ) -> i32 {
        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            let score = self.heuristic.score_move_in(board, mv, mover);
            return if mover == root { score } else { -score };
        }

        self.stats.nodes += 1;
        let mut child = *board;
        child.play(mv, mover);

        let next = match next_turn(&child, mover) {
            TurnState::Over(_) => return terminal_value(&child, root),
            TurnState::Move(side) | TurnState::Pass(side) => side,
        };

        let replies = child.valid_moves(next);
        if next == root {
            let mut best = i32::MIN;
            for reply in replies {
                let value = self.minimax(&child, reply, next, depth - 1, alpha, beta, root);
                best = best.max(value);
                alpha = alpha.max(best);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for reply in replies {
                let value = self.minimax(&child, reply, next, depth - 1, alpha, beta, root);
                best = best.min(value);
                beta = beta.min(best);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    // =========================================================================
    // Legacy
    // =========================================================================

    /// Stateless recursion: the board is never advanced and only the leaf
    /// move is scored, with fresh-board mobility. An empty move set yields
    /// `i32::MIN` for the maximizing role and `i32::MAX` for the minimizing
    /// role.
    fn legacy(&mut self, board: &Board, mv: Move, depth: u32, maximizing: bool, root: Side) -> i32 {
        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return self.heuristic.score_move(mv, root);
        }

        self.stats.nodes += 1;
        let role = if maximizing { root } else { root.opponent() };
        let moves = board.valid_moves(role);

        if maximizing {
            moves
                .iter()
                .map(|&next| self.legacy(board, next, depth - 1, false, root))
                .max()
                .unwrap_or(i32::MIN)
        } else {
            moves
                .iter()
                .map(|&next| self.legacy(board, next, depth - 1, true, root))
                .min()
                .unwrap_or(i32::MAX)
        }
    }
}

/// Value of a finished position for `root`: a win or loss dominates any
/// heuristic score and the disc margin breaks ties between them.
fn terminal_value(board: &Board, root: Side) -> i32 {
    let score = board.score();
    let margin = score.of(root) as i32 - score.of(root.opponent()) as i32;
    margin.signum() * WIN_SCORE + margin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher(mode: SearchMode, depth: u32) -> Searcher {
        Searcher::new(&OpponentConfig::default().with_search(mode).with_depth(depth))
    }

    #[test]
    fn test_no_moves_returns_none() {
        let board = Board::empty();
        assert_eq!(searcher(SearchMode::Minimax, 4).search(&board, Side::First), None);
        assert_eq!(searcher(SearchMode::Legacy, 4).search(&board, Side::First), None);
    }

    #[test]
    fn test_legacy_picks_first_legal_move() {
        let board = Board::new();
        let mut s = searcher(SearchMode::Legacy, 4);
        let first = board.valid_moves(Side::Second)[0];
        assert_eq!(s.search(&board, Side::Second), Some(first));
    }

    #[test]
    fn test_legacy_root_values_are_equal() {
        let mut board = Board::new();
        board.make_move(2, 3, Side::First);
        let mut s = searcher(SearchMode::Legacy, 3);
        let values: Vec<i32> = board
            .valid_moves(Side::Second)
            .into_iter()
            .map(|mv| s.root_value(&board, mv, Side::Second))
            .collect();
        assert!(values.len() > 1);
        assert!(values.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_depth_zero_matches_heuristic() {
        let board = Board::new();
        let mut s = searcher(SearchMode::Minimax, 0);
        let h = Heuristic::default();
        for mv in board.valid_moves(Side::First) {
            assert_eq!(
                s.root_value(&board, mv, Side::First),
                h.score_move_in(&board, mv, Side::First)
            );
        }
    }

    #[test]
    fn test_minimax_scores_game_ending_move() {
        // Playing (0,0) captures the last white disc and ends the game.
        let board: Board = "
            .WB.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let mut s = searcher(SearchMode::Minimax, 4);
        assert_eq!(s.root_value(&board, Move::new(0, 0), Side::First), WIN_SCORE + 3);
        assert_eq!(s.search(&board, Side::First), Some(Move::new(0, 0)));
    }

    #[test]
    fn test_terminal_value_sign() {
        let board: Board = "
            BBB.....
            ........
            ........
            ........
            ........
            ........
            ........
            .......W"
            .parse()
            .unwrap();
        assert_eq!(terminal_value(&board, Side::First), WIN_SCORE + 2);
        assert_eq!(terminal_value(&board, Side::Second), -WIN_SCORE - 2);
    }

    #[test]
    fn test_stats_are_recorded() {
        let mut s = searcher(SearchMode::Minimax, 2);
        s.search(&Board::new(), Side::First);
        assert_eq!(s.stats().root_moves, 4);
        assert!(s.stats().nodes > 0);
        assert!(s.stats().leaf_evaluations > 0);
    }
}
