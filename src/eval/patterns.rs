//! Pattern scores for Caro evaluation
//!
//! A line shape is the contiguous run of one player's stones through a
//! cell along one axis, plus how many of its two ends are open (in bounds
//! and empty). The [`PatternTable`] maps shapes to scores.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::Score;

/// Contiguous run through a cell along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    /// Stones in the run, including the cell itself
    pub length: u32,
    /// Ends of the run that are in bounds and empty (0-2)
    pub open_ends: u32,
}

/// Score per line shape. Shapes not listed score zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternTable {
    /// Five or more in a row, any ends
    pub five: Score,
    /// Four, both ends open
    pub open_four: Score,
    /// Four, one end open
    pub closed_four: Score,
    /// Three, both ends open
    pub open_three: Score,
    /// Three, one end open
    pub closed_three: Score,
    /// Two, both ends open
    pub open_two: Score,
}

impl PatternTable {
    /// Weights the engine plays with
    pub const DEFAULT: PatternTable = PatternTable {
        five: 10_000.0,
        open_four: 5_000.0,
        closed_four: 100.0,
        open_three: 500.0,
        closed_three: 10.0,
        open_two: 5.0,
    };

    /// Score of one line shape
    #[inline]
    pub fn score(&self, shape: LineShape) -> Score {
        match (shape.length, shape.open_ends) {
            (5.., _) => self.five,
            (4, 2) => self.open_four,
            (4, 1) => self.closed_four,
            (3, 2) => self.open_three,
            (3, 1) => self.closed_three,
            (2, 2) => self.open_two,
            _ => 0.0,
        }
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Measure the run of `color` through `pos` along `(dr, dc)`.
///
/// The cell at `pos` counts as part of the run whatever it holds, so the
/// shape can be read for a stone that is about to be placed.
pub fn line_shape(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> LineShape {
    let mut length = 1;
    let mut open_ends = 0;

    for (sr, sc) in [(dr, dc), (-dr, -dc)] {
        let mut k = 1;
        let end = loop {
            match pos.offset(sr, sc, k) {
                Some(p) if board.get(p) == color => {
                    length += 1;
                    k += 1;
                }
                other => break other,
            }
        };
        if matches!(end, Some(p) if board.is_empty(p)) {
            open_ends += 1;
        }
    }

    LineShape { length, open_ends }
}

/// Local strength of `color` at `pos`: the table score of each of the
/// four line shapes through the cell, summed.
#[must_use]
pub fn score_point(board: &Board, pos: Pos, color: Stone, table: &PatternTable) -> Score {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let shape = line_shape(board, pos, dr, dc, color);
            table.score(shape)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(length: u32, open_ends: u32) -> LineShape {
        LineShape { length, open_ends }
    }

    #[test]
    fn test_pattern_table_values() {
        let t = PatternTable::DEFAULT;
        assert_eq!(t.score(shape(5, 0)), 10_000.0);
        assert_eq!(t.score(shape(7, 2)), 10_000.0);
        assert_eq!(t.score(shape(4, 2)), 5_000.0);
        assert_eq!(t.score(shape(4, 1)), 100.0);
        assert_eq!(t.score(shape(4, 0)), 0.0);
        assert_eq!(t.score(shape(3, 2)), 500.0);
        assert_eq!(t.score(shape(3, 1)), 10.0);
        assert_eq!(t.score(shape(2, 2)), 5.0);
        assert_eq!(t.score(shape(2, 1)), 0.0);
        assert_eq!(t.score(shape(1, 2)), 0.0);
    }

    #[test]
    fn test_line_shape_open_three() {
        let mut board = Board::new();
        for c in 5..8 {
            board.place_stone(Pos::new(7, c), Stone::PlayerOne);
        }
        let s = line_shape(&board, Pos::new(7, 6), 0, 1, Stone::PlayerOne);
        assert_eq!(s, shape(3, 2));
    }

    #[test]
    fn test_line_shape_edge_and_opponent_close_ends() {
        let mut board = Board::new();
        // Run against the left edge
        for c in 0..3 {
            board.place_stone(Pos::new(0, c), Stone::PlayerOne);
        }
        assert_eq!(
            line_shape(&board, Pos::new(0, 1), 0, 1, Stone::PlayerOne),
            shape(3, 1)
        );

        // Opponent caps the right end too
        board.place_stone(Pos::new(0, 3), Stone::PlayerTwo);
        assert_eq!(
            line_shape(&board, Pos::new(0, 1), 0, 1, Stone::PlayerOne),
            shape(3, 0)
        );
    }

    #[test]
    fn test_line_shape_counts_unplaced_center() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 4), Stone::PlayerTwo);
        board.place_stone(Pos::new(6, 6), Stone::PlayerTwo);
        // (5, 5) is empty but still counts as the run's own cell
        let s = line_shape(&board, Pos::new(5, 5), 1, 1, Stone::PlayerTwo);
        assert_eq!(s, shape(3, 2));
    }

    #[test]
    fn test_score_point_sums_axes() {
        let mut board = Board::new();
        // Open three horizontally and open two vertically through (7, 7)
        for c in 6..9 {
            board.place_stone(Pos::new(7, c), Stone::PlayerOne);
        }
        board.place_stone(Pos::new(8, 7), Stone::PlayerOne);

        let table = PatternTable::DEFAULT;
        let score = score_point(&board, Pos::new(7, 7), Stone::PlayerOne, &table);
        assert_eq!(score, 500.0 + 5.0);
    }

    #[test]
    fn test_score_point_five() {
        let mut board = Board::new();
        for r in 2..7 {
            board.place_stone(Pos::new(r, 0), Stone::PlayerTwo);
        }
        let table = PatternTable::DEFAULT;
        assert_eq!(
            score_point(&board, Pos::new(4, 0), Stone::PlayerTwo, &table),
            10_000.0
        );
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        let t = PatternTable::DEFAULT;
        assert!(t.five > t.open_four);
        assert!(t.open_four > t.open_three);
        assert!(t.open_three > t.closed_four);
        assert!(t.closed_four > t.closed_three);
        assert!(t.closed_three > t.open_two);
    }
}
