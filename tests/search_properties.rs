//! Property-based tests for search invariants

use caro::config::EngineConfig;
use caro::eval::Score;
use caro::rules::is_winning_line;
use caro::search::{nearby_empty_cells, win_score, Searcher};
use caro::{AIEngine, Board, Pos, Stone};
use proptest::prelude::*;

// Strategy: a few alternating stones dropped anywhere, duplicates skipped
fn random_position() -> impl Strategy<Value = Board> {
    prop::collection::vec((0u8..15, 0u8..15), 1..14).prop_map(|cells| {
        let mut board = Board::new();
        let mut stone = Stone::PlayerOne;
        for (r, c) in cells {
            let pos = Pos::new(r, c);
            if board.is_empty(pos) {
                board.place_stone(pos, stone);
                stone = stone.opponent();
            }
        }
        board
    })
}

fn any_player() -> impl Strategy<Value = Stone> {
    prop::sample::select(vec![Stone::PlayerOne, Stone::PlayerTwo])
}

/// Unpruned minimax over the same move lists the searcher uses
fn minimax(
    board: &mut Board,
    searcher: &Searcher,
    depth: u8,
    maximizing: bool,
    root: Stone,
) -> Score {
    let config = searcher.config();
    if depth == 0 {
        return searcher.evaluate(board, root);
    }
    let moves = nearby_empty_cells(board, config.ply_distance);
    if moves.is_empty() {
        return searcher.evaluate(board, root);
    }

    let mover = if maximizing { root } else { root.opponent() };
    let mut best = if maximizing {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };
    for &pos in moves.iter().take(config.ply_candidates) {
        let mut trial = board.trial(pos, mover);
        if is_winning_line(&trial, pos, mover) {
            let win = win_score(depth);
            return if maximizing { win } else { -win };
        }
        let score = minimax(&mut trial, searcher, depth - 1, !maximizing, root);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_pruned_search_equals_minimax(
        board in random_position(),
        root in any_player(),
        depth in 1u8..=3,
        maximizing in any::<bool>(),
    ) {
        let mut board = board;
        let mut searcher = Searcher::new(EngineConfig::default());
        let expected = minimax(&mut board, &searcher, depth, maximizing, root);
        let score = searcher.search(
            &mut board,
            depth,
            Score::NEG_INFINITY,
            Score::INFINITY,
            maximizing,
            root,
        );
        prop_assert_eq!(score, expected);
    }

    #[test]
    fn test_best_move_leaves_board_unchanged(
        board in random_position(),
        player in any_player(),
        depth in 1u8..=3,
    ) {
        let mut work = board.clone();
        let mut engine = AIEngine::new();
        let result = engine.best_move(&mut work, depth, player);

        prop_assert_eq!(&work, &board);
        let pos = result.best_move.unwrap();
        prop_assert!(board.is_empty(pos));
    }

    #[test]
    fn test_search_leaves_board_unchanged(
        board in random_position(),
        root in any_player(),
        depth in 0u8..=3,
    ) {
        let mut work = board.clone();
        let mut searcher = Searcher::new(EngineConfig::default());
        let (alpha, beta) = (Score::NEG_INFINITY, Score::INFINITY);
        let _ = searcher.search(&mut work, depth, alpha, beta, true, root);
        prop_assert_eq!(work, board);
    }

    #[test]
    fn test_chosen_move_wins_when_a_win_exists(
        board in random_position(),
        player in any_player(),
        start in (0u8..15, 0u8..15),
        dir in prop::sample::select(vec![(0i32, 1i32), (1, 0), (1, 1), (1, -1)]),
    ) {
        // Overlay a four for `player`, skipping layouts that leave the board or hit a stone
        let mut board = board;
        let origin = Pos::new(start.0, start.1);
        let line: Vec<Pos> = (0..4).filter_map(|k| origin.offset(dir.0, dir.1, k)).collect();
        prop_assume!(line.len() == 4 && line.iter().all(|&p| board.is_empty(p)));
        for &pos in &line {
            board.place_stone(pos, player);
        }

        let winning: Vec<Pos> = nearby_empty_cells(&board, 2)
            .into_iter()
            .filter(|&pos| {
                let trial = board.trial(pos, player);
                is_winning_line(&trial, pos, player)
            })
            .collect();
        prop_assume!(!winning.is_empty());

        let mut engine = AIEngine::new();
        let pos = engine.best_move(&mut board, 2, player).best_move.unwrap();
        prop_assert!(winning.contains(&pos));
    }
}
