//! Board structure with scoped trial placement

use std::fmt;
use std::ops::{Deref, DerefMut};

use thiserror::Error;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};

/// Reasons a wire grid cannot be turned into a [`Board`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has {0} rows, expected 15")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 15")]
    RowLength { row: usize, len: usize },
    #[error("cell ({row}, {col}) holds {value}, expected 0, 1 or 2")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

/// Game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Player one stones bitboard
    pub one: Bitboard,
    /// Player two stones bitboard
    pub two: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            one: Bitboard::new(),
            two: Bitboard::new(),
        }
    }

    /// Build a board from rows of wire cell values (0 = empty, 1 / 2 = players)
    pub fn from_grid<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                let stone =
                    Stone::from_cell(value).ok_or(BoardError::InvalidCell { row, col, value })?;
                board.place_stone(Pos::new(row as u8, col as u8), stone);
            }
        }
        Ok(board)
    }

    /// Rows of wire cell values
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        (0..BOARD_SIZE as u8)
            .map(|r| {
                (0..BOARD_SIZE as u8)
                    .map(|c| self.get(Pos::new(r, c)).to_cell())
                    .collect()
            })
            .collect()
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.one.get(pos) {
            Stone::PlayerOne
        } else if self.two.get(pos) {
            Stone::PlayerTwo
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.one.get(pos) && !self.two.get(pos)
    }

    /// Place a stone. Placing `Empty` is a no-op.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::PlayerOne => self.one.set(pos),
            Stone::PlayerTwo => self.two.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.one.clear(pos);
        self.two.clear(pos);
    }

    /// Place `stone` on the empty cell `pos` for as long as the returned guard lives.
    ///
    /// The guard dereferences to the board, so nested searches borrow through it.
    /// Dropping the guard empties the cell again, on every exit path.
    #[inline]
    pub fn trial(&mut self, pos: Pos, stone: Stone) -> TrialStone<'_> {
        debug_assert!(self.is_empty(pos), "trial stone on occupied cell {pos:?}");
        self.place_stone(pos, stone);
        TrialStone { board: self, pos }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::PlayerOne => Some(&self.one),
            Stone::PlayerTwo => Some(&self.two),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.one.union(&self.two)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.one.count() + self.two.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.one.is_empty() && self.two.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == BOARD_SIZE * BOARD_SIZE
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{:2}", c)?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "{:2} ", r)?;
            for c in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Stone::PlayerOne => " X",
                    Stone::PlayerTwo => " O",
                    Stone::Empty => " .",
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A stone placed by [`Board::trial`], removed when dropped
pub struct TrialStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Deref for TrialStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}
