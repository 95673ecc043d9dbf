//! Board representation for Caro

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, BoardError, TrialStone};

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Cell states. `PlayerOne` and `PlayerTwo` double as player identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::PlayerOne => Stone::PlayerTwo,
            Stone::PlayerTwo => Stone::PlayerOne,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Decode a wire cell value (0 = empty, 1 / 2 = players)
    #[inline]
    pub fn from_cell(value: u8) -> Option<Stone> {
        match value {
            0 => Some(Stone::Empty),
            1 => Some(Stone::PlayerOne),
            2 => Some(Stone::PlayerTwo),
            _ => None,
        }
    }

    /// Decode a wire player id. Only 1 and 2 name a player.
    #[inline]
    pub fn from_player_id(id: u8) -> Option<Stone> {
        match Stone::from_cell(id) {
            Some(Stone::Empty) | None => None,
            player => player,
        }
    }

    /// Wire cell value
    #[inline]
    pub fn to_cell(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::PlayerOne => 1,
            Stone::PlayerTwo => 2,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Center of the board, the opening move on an empty board
    pub const CENTER: Pos = Pos {
        row: (BOARD_SIZE / 2) as u8,
        col: (BOARD_SIZE / 2) as u8,
    };

    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `k` cells along `(dr, dc)`, or `None` when that leaves the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32) -> Option<Pos> {
        let r = i32::from(self.row) + dr * k;
        let c = i32::from(self.col) + dc * k;
        if Pos::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
