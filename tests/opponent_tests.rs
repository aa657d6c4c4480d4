//! Opponent integration tests.

use rust_othello::ai::{
    greedy_move, select_move, Heuristic, Opponent, OpponentConfig, SearchMode, Searcher,
};
use rust_othello::board::Board;
use rust_othello::core::{Difficulty, GameRng, Move, Side};
use rust_othello::rules::next_turn;

/// First can only play the corner at (0,0).
fn single_move_board() -> Board {
    "
    .WB.....
    ........
    ........
    ........
    ........
    ........
    ........
    ........"
        .parse()
        .unwrap()
}

/// First can play (3,2) in the interior or the corner (7,7).
fn corner_or_interior_board() -> Board {
    "
    ........
    ........
    ........
    ...WB...
    ........
    ........
    ........
    .....BW."
        .parse()
        .unwrap()
}

// =============================================================================
// Easy
// =============================================================================

#[test]
fn test_easy_single_move_always_returned() {
    let board = single_move_board();
    assert_eq!(board.valid_moves(Side::First).as_slice(), &[Move::new(0, 0)]);

    let mut opponent = Opponent::new(Difficulty::Easy);
    for _ in 0..1000 {
        assert_eq!(opponent.select_move(&board, Side::First), Some(Move::new(0, 0)));
    }
}

#[test]
fn test_easy_covers_all_moves() {
    let board = Board::new();
    let mut rng = GameRng::new(11);
    let mut seen = Vec::new();
    for _ in 0..200 {
        let mv = select_move(&board, Side::First, Difficulty::Easy, &mut rng).unwrap();
        if !seen.contains(&mv) {
            seen.push(mv);
        }
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_easy_with_injected_rng() {
    let board = Board::new();
    let mut a = Opponent::new(Difficulty::Easy).with_rng(GameRng::new(99));
    let mut b = Opponent::new(Difficulty::Easy).with_rng(GameRng::new(99));
    let seq_a: Vec<_> = (0..10).map(|_| a.select_move(&board, Side::Second)).collect();
    let seq_b: Vec<_> = (0..10).map(|_| b.select_move(&board, Side::Second)).collect();
    assert_eq!(seq_a, seq_b);
}

// =============================================================================
// Normal
// =============================================================================

#[test]
fn test_normal_prefers_corner() {
    let board = corner_or_interior_board();
    assert_eq!(
        board.valid_moves(Side::First).as_slice(),
        &[Move::new(3, 2), Move::new(7, 7)]
    );

    let mut opponent = Opponent::new(Difficulty::Normal);
    assert_eq!(opponent.select_move(&board, Side::First), Some(Move::new(7, 7)));
}

#[test]
fn test_normal_scores_against_fresh_board() {
    let h = Heuristic::default();
    // (3,2) is an opening move: Second keeps 3 replies.
    assert_eq!(h.score_move(Move::new(3, 2), Side::First), -15);
    // (7,7) is illegal on a fresh board, so Second keeps all 4.
    assert_eq!(h.score_move(Move::new(7, 7), Side::First), 90);
}

#[test]
fn test_normal_is_deterministic() {
    let mut board = Board::new();
    board.make_move(2, 3, Side::First);
    let a = greedy_move(&board, Side::Second, &Heuristic::default());
    let b = select_move(&board, Side::Second, Difficulty::Normal, &mut GameRng::new(0));
    assert_eq!(a, b);
    assert!(a.is_some());
}

// =============================================================================
// Hard
// =============================================================================

#[test]
fn test_hard_returns_legal_move() {
    let mut board = Board::new();
    board.make_move(2, 3, Side::First);
    let mut opponent = Opponent::new(Difficulty::Hard);
    let mv = opponent.select_move(&board, Side::Second).unwrap();
    assert!(board.is_valid_move(i32::from(mv.row), i32::from(mv.col), Side::Second));
    assert!(opponent.search_stats().leaf_evaluations > 0);
}

#[test]
fn test_hard_legacy_matches_first_legal_move() {
    let mut board = Board::new();
    board.make_move(2, 3, Side::First);
    let config = OpponentConfig::default().with_search(SearchMode::Legacy);
    let mut opponent = Opponent::with_config(Difficulty::Hard, &config);
    let first = board.valid_moves(Side::Second)[0];
    assert_eq!(opponent.select_move(&board, Side::Second), Some(first));
}

#[test]
fn test_hard_picks_first_best_root_value() {
    let mut board = Board::new();
    for (row, col, side) in [(2, 3, Side::First), (2, 2, Side::Second), (2, 1, Side::First)] {
        assert!(board.make_move(row, col, side));
    }

    let config = OpponentConfig::default().with_depth(2);
    let mut searcher = Searcher::new(&config);
    let moves = board.valid_moves(Side::Second);
    let values: Vec<i32> = moves
        .iter()
        .map(|&mv| searcher.root_value(&board, mv, Side::Second))
        .collect();
    let best = values.iter().copied().max().unwrap();
    let expected = moves[values.iter().position(|&v| v == best).unwrap()];

    let mut opponent = Opponent::with_config(Difficulty::Hard, &config);
    assert_eq!(opponent.select_move(&board, Side::Second), Some(expected));
}

#[test]
fn test_hard_ends_game_when_it_can() {
    let board = single_move_board();
    let mut opponent = Opponent::new(Difficulty::Hard);
    assert_eq!(opponent.select_move(&board, Side::First), Some(Move::new(0, 0)));
}

#[test]
fn test_hard_breaks_ties_by_move_order() {
    // Either move leads to a forced 3-3 finish, so the first move wins the tie.
    let board = corner_or_interior_board();
    let mut opponent = Opponent::new(Difficulty::Hard);
    assert_eq!(opponent.select_move(&board, Side::First), Some(Move::new(3, 2)));
}

#[test]
fn test_hard_never_mutates_board() {
    let mut board = Board::new();
    board.make_move(2, 3, Side::First);
    let before = board;
    let mut opponent = Opponent::new(Difficulty::Hard);
    opponent.select_move(&board, Side::Second);
    assert_eq!(board, before);
}

// =============================================================================
// Full Games
// =============================================================================

/// Play a full game between two opponents, returning the final board.
fn play_out(first: &mut Opponent, second: &mut Opponent) -> Board {
    let mut board = Board::new();
    let mut side = Side::First;
    for _ in 0..128 {
        let opponent = match side {
            Side::First => &mut *first,
            Side::Second => &mut *second,
        };
        let mv = opponent.select_move(&board, side).expect("side to move has a move");
        assert!(board.play(mv, side));
        match next_turn(&board, side).side_to_move() {
            Some(next) => side = next,
            None => return board,
        }
    }
    panic!("game did not finish");
}

#[test]
fn test_easy_vs_normal_finishes() {
    let mut easy = Opponent::with_config(Difficulty::Easy, &OpponentConfig::default().with_seed(5));
    let mut normal = Opponent::new(Difficulty::Normal);
    let board = play_out(&mut easy, &mut normal);
    assert!(board.is_game_over());
    let score = board.score();
    assert_eq!(score.first + score.second + board.empty_count(), 64);
}

#[test]
fn test_shallow_hard_vs_easy_finishes() {
    let config = OpponentConfig::default().with_depth(1).with_seed(8);
    let mut hard = Opponent::with_config(Difficulty::Hard, &config);
    let mut easy = Opponent::with_config(Difficulty::Easy, &config);
    let board = play_out(&mut easy, &mut hard);
    assert!(board.is_game_over());
}
