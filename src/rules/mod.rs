//! Game rules for Caro
//!
//! Free-style five-in-a-row: a run of five or more stones wins, overlines
//! included. There are no captures and no forbidden shapes.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, is_valid_move, is_winning_line, DIRECTIONS};
