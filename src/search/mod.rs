//! Search module for the Caro AI
//!
//! Contains:
//! - Candidate generation near existing stones
//! - Move ordering by attack + defence value
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;
pub mod ordering;

pub use alphabeta::{is_decisive, win_score, SearchStats, Searcher, WIN_SCORE};
pub use candidates::nearby_empty_cells;
pub use ordering::{quick_score, rank};
