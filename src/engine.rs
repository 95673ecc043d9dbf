//! Main AI Engine integrating all search components
//!
//! The engine picks a move in this order:
//!
//! 1. **Opening**: an empty board is answered with the center cell
//! 2. **Immediate win**: any candidate that completes five for the mover
//! 3. **Block**: any candidate that would complete five for the opponent
//! 4. **Alpha-Beta**: the best-ranked candidates searched to the requested depth
//!
//! # Example
//!
//! ```
//! use caro::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::PlayerOne);
//!
//! let result = engine.get_move_with_stats(&board, Stone::PlayerTwo, Difficulty::Normal);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::config::{Difficulty, EngineConfig};
use crate::eval::Score;
use crate::rules::is_winning_line;
use crate::search::{nearby_empty_cells, rank, win_score, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board: center cell
    Opening,
    /// Move completes five for the mover
    ImmediateWin,
    /// Move takes the cell where the opponent would complete five
    Block,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Board is full, nothing to play
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found. `None` only when the board is full.
    pub best_move: Option<Pos>,
    /// Root-player score of the chosen move
    pub score: Score,
    /// Phase that chose the move
    pub search_type: SearchType,
    /// Requested search depth
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of search nodes visited
    pub nodes: u64,
    /// Sibling loops cut short by alpha-beta
    pub cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn shortcut(
        best_move: Option<Pos>,
        score: Score,
        search_type: SearchType,
        depth: u8,
        start: Instant,
    ) -> Self {
        Self {
            best_move,
            score,
            search_type,
            depth,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: 0,
            cutoffs: 0,
        }
    }
}

/// Main AI Engine for Caro.
///
/// Holds the tuning configuration and a searcher. Each call works on its
/// own board: `get_move*` clone the caller's board, `best_move` borrows it
/// mutably and hands it back unchanged.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine with the default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom tuning.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    /// Get the best move for `color` at the given difficulty.
    ///
    /// Returns `None` only when the board has no empty cell.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone, difficulty: Difficulty) -> Option<Pos> {
        self.get_move_with_stats(board, color, difficulty).best_move
    }

    /// Get the best move with search statistics, searching a private copy of `board`.
    #[must_use]
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        color: Stone,
        difficulty: Difficulty,
    ) -> MoveResult {
        let mut work_board = board.clone();
        self.best_move(&mut work_board, difficulty.depth(), color)
    }

    /// Choose a move for `color`, searching `depth` plies.
    ///
    /// The board is only touched through trial guards and is unchanged on
    /// return.
    pub fn best_move(&mut self, board: &mut Board, depth: u8, color: Stone) -> MoveResult {
        let start = Instant::now();
        self.searcher.reset_stats();
        debug!("thinking at depth {depth} for {color:?}");

        let config = self.searcher.config().clone();
        let candidates = nearby_empty_cells(board, config.root_distance);

        // 1. Nothing near any stone: the board is either empty or full
        if candidates.is_empty() {
            let result = if board.is_board_empty() {
                MoveResult::shortcut(Some(Pos::CENTER), 0.0, SearchType::Opening, depth, start)
            } else {
                MoveResult::shortcut(None, 0.0, SearchType::NoMove, depth, start)
            };
            log_result(&result);
            return result;
        }

        // 2. Immediate win, else immediate block
        let (win, block) = find_immediate(board, &candidates, color);
        if let Some(pos) = win {
            let result = MoveResult::shortcut(
                Some(pos),
                win_score(depth),
                SearchType::ImmediateWin,
                depth,
                start,
            );
            log_result(&result);
            return result;
        }
        if let Some(pos) = block {
            let result = MoveResult::shortcut(Some(pos), 0.0, SearchType::Block, depth, start);
            log_result(&result);
            return result;
        }

        // 3. Order and keep the most promising candidates
        let mut ranked = rank(board, &candidates, color, &config.patterns);
        ranked.truncate(config.root_candidates);
        debug!("root candidates: {ranked:?}");

        // 4. Search each; the opponent replies first
        let mut best_move = ranked[0];
        let mut best_score = Score::NEG_INFINITY;
        let mut alpha = Score::NEG_INFINITY;
        let beta = Score::INFINITY;
        let child_depth = depth.saturating_sub(1);
        let searcher = &mut self.searcher;

        for &pos in &ranked {
            let score = {
                let mut trial = board.trial(pos, color);
                searcher.search(&mut trial, child_depth, alpha, beta, false, color)
            };
            debug!("  {pos:?} -> {score}");

            if score > best_score {
                best_score = score;
                best_move = pos;
            }
            alpha = alpha.max(best_score);
        }

        let stats = self.searcher.stats();
        let result = MoveResult {
            best_move: Some(best_move),
            score: best_score,
            search_type: SearchType::AlphaBeta,
            depth,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
        };
        log_result(&result);
        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First candidate that wins for `color` and first that wins for the
/// opponent, in candidate order. Stops at the first win.
fn find_immediate(
    board: &mut Board,
    candidates: &[Pos],
    color: Stone,
) -> (Option<Pos>, Option<Pos>) {
    let opponent = color.opponent();
    let mut block = None;

    for &pos in candidates {
        {
            let trial = board.trial(pos, color);
            if is_winning_line(&trial, pos, color) {
                return (Some(pos), block);
            }
        }
        if block.is_none() {
            let trial = board.trial(pos, opponent);
            if is_winning_line(&trial, pos, opponent) {
                block = Some(pos);
            }
        }
    }

    (None, block)
}

fn log_result(result: &MoveResult) {
    match result.best_move {
        Some(pos) => info!(
            "move ({}, {}) by {:?} | score {} | {} nodes, {} cutoffs | {}ms",
            pos.row,
            pos.col,
            result.search_type,
            result.score,
            result.nodes,
            result.cutoffs,
            result.time_ms
        ),
        None => info!("no move available | {}ms", result.time_ms),
    }
}
