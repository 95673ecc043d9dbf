//! Caro AI Engine
//!
//! A move-selection engine for Caro, free-style five in a row on a 15x15
//! board:
//! - Five or more in a row wins (overlines count)
//! - No captures, no forbidden moves
//! - Difficulty 1-4 maps straight to search depth
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and scoped trial stones
//! - [`rules`]: Win detection
//! - [`eval`]: Line patterns and whole-board evaluation
//! - [`search`]: Candidate generation, move ordering and alpha-beta search
//! - [`engine`]: Root move selection
//! - [`request`]: JSON request boundary used by the `caro-move` binary
//!
//! # Quick Start
//!
//! ```
//! use caro::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//!
//! board.place_stone(Pos::new(7, 7), Stone::PlayerOne);
//!
//! // AI responds as player two
//! if let Some(pos) = engine.get_move(&board, Stone::PlayerTwo, Difficulty::Easy) {
//!     board.place_stone(pos, Stone::PlayerTwo);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Empty board: center
//! 2. Immediate winning move
//! 3. Block the opponent's immediate win
//! 4. Alpha-beta search over the best-ranked candidates

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod request;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{Difficulty, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use request::{compute_best_move, MoveRequest, MoveResponse, RequestError};
