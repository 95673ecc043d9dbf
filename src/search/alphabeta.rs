//! Minimax search with alpha-beta pruning
//!
//! Scores are always expressed from the root player's point of view: the
//! root player maximizes, the opponent minimizes the same number. A move
//! that completes five ends the branch at once with a score of
//! `±(WIN_SCORE + depth)`, so a win found with more depth remaining (that
//! is, sooner) beats a later one and a later loss beats a sooner one.
//!
//! Interior nodes do not re-rank their moves: they try the first
//! `ply_candidates` cells within `ply_distance` of a stone, in generation
//! order.
//!
//! # Example
//!
//! ```
//! use caro::board::{Board, Pos, Stone};
//! use caro::config::EngineConfig;
//! use caro::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::PlayerOne);
//! board.place_stone(Pos::new(7, 8), Stone::PlayerTwo);
//!
//! let mut searcher = Searcher::new(EngineConfig::default());
//! let (alpha, beta) = (f64::NEG_INFINITY, f64::INFINITY);
//! let score = searcher.search(&mut board, 2, alpha, beta, true, Stone::PlayerOne);
//! assert!(score.abs() < 1_000_000.0);
//! assert_eq!(board.stone_count(), 2);
//! ```

use crate::board::{Board, Stone};
use crate::config::EngineConfig;
use crate::eval::{evaluate, Score};
use crate::rules::is_winning_line;

use super::candidates::nearby_empty_cells;

/// Base magnitude of a forced win or loss
pub const WIN_SCORE: Score = 1_000_000.0;

/// Score of a win found with `depth` plies still to search
#[inline]
pub fn win_score(depth: u8) -> Score {
    WIN_SCORE + Score::from(depth)
}

/// True for scores that encode a forced win or loss within the horizon
#[inline]
pub fn is_decisive(score: Score) -> bool {
    score.abs() >= WIN_SCORE
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
    /// Branches ended by a completed five
    pub wins_found: u64,
}

/// Depth-first alpha-beta searcher.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: EngineConfig,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Configuration this searcher runs with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Statistics accumulated since the last reset
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Static evaluation for `root`, with this searcher's weights.
    #[inline]
    pub fn evaluate(&self, board: &Board, root: Stone) -> Score {
        let config = &self.config;
        evaluate(board, root, &config.patterns, config.defense_weight)
    }

    /// Minimax value of `board` searched `depth` plies deep.
    ///
    /// `maximizing` says whose turn it is: the root player's when true,
    /// the opponent's otherwise. Every stone tried is placed through a
    /// [`Board::trial`] guard, so the board is unchanged on return even
    /// after a cutoff or a win.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        root: Stone,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.evaluate(board, root);
        }

        let moves = nearby_empty_cells(board, self.config.ply_distance);
        if moves.is_empty() {
            return self.evaluate(board, root);
        }

        let mover = if maximizing { root } else { root.opponent() };
        let mut best = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };

        for &pos in moves.iter().take(self.config.ply_candidates) {
            let mut trial = board.trial(pos, mover);

            if is_winning_line(&trial, pos, mover) {
                self.stats.wins_found += 1;
                return if maximizing {
                    win_score(depth)
                } else {
                    -win_score(depth)
                };
            }

            let score = self.search(&mut trial, depth - 1, alpha, beta, !maximizing, root);
            drop(trial);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
