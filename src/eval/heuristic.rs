//! Static evaluation of a whole board
//!
//! Sums the local pattern strength of every stone. The opponent's stones
//! are weighted by a defence factor above 1, so the engine would rather
//! break an enemy shape than build an equal one of its own.

use crate::board::{Board, Stone};

use super::patterns::{score_point, PatternTable};
use super::Score;

/// Opponent weight the engine plays with
pub const DEFENSE_WEIGHT: Score = 1.2;

/// Evaluate the board from the perspective of `color`.
///
/// Positive values favour `color`. Each of `color`'s stones adds its
/// [`score_point`]; each opponent stone subtracts `defense_weight` times
/// its own.
#[must_use]
pub fn evaluate(board: &Board, color: Stone, table: &PatternTable, defense_weight: Score) -> Score {
    let opponent = color.opponent();
    let mut score = 0.0;

    // Occupied cells only, in grid-scan order
    for pos in board.occupied().iter_ones() {
        let stone = board.get(pos);
        if stone == color {
            score += score_point(board, pos, color, table);
        } else if stone == opponent {
            score -= score_point(board, pos, opponent, table) * defense_weight;
        }
    }

    score
}
