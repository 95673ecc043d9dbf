//! Candidate move generation
//!
//! Only empty cells near existing stones are worth considering, which keeps
//! the branching factor far below the number of empty cells.

use crate::board::{Bitboard, Board, Pos};

/// Empty cells within Chebyshev distance `distance` of any stone.
///
/// Stones are visited in grid-scan order and each neighbourhood row by row,
/// so the result is in discovery order and reproducible for a given board.
/// Each cell appears once. Empty (and full) boards yield no candidates.
#[must_use]
pub fn nearby_empty_cells(board: &Board, distance: u8) -> Vec<Pos> {
    let radius = i32::from(distance);
    let mut moves = Vec::with_capacity(64);
    let mut seen = Bitboard::new();

    for stone in board.occupied().iter_ones() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let Some(pos) = stone.offset(dr, dc, 1) else {
                    continue;
                };
                if seen.get(pos) || !board.is_empty(pos) {
                    continue;
                }
                seen.set(pos);
                moves.push(pos);
            }
        }
    }

    moves
}
