//! Evaluation module for Caro positions
//!
//! - [`patterns`]: line shapes, the pattern score table and per-cell scoring
//! - [`heuristic`]: whole-board evaluation with defensive weighting

pub mod heuristic;
pub mod patterns;

/// Search and evaluation score. Fractional because of the defence weight.
pub type Score = f64;

pub use heuristic::{evaluate, DEFENSE_WEIGHT};
pub use patterns::{line_shape, score_point, LineShape, PatternTable};
