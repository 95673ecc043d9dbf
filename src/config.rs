//! Engine configuration
//!
//! Difficulty levels map to a fixed search depth; everything else the
//! engine is tuned with lives in [`EngineConfig`].

use std::fmt;

use crate::eval::{PatternTable, Score, DEFENSE_WEIGHT};

/// Difficulty level requested by a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Ultimate,
}

impl Difficulty {
    /// All levels, easiest first
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Ultimate,
    ];

    /// Search depth in plies: {1 → 1, 2 → 2, 3 → 3, 4 → 4}
    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
            Difficulty::Ultimate => 4,
        }
    }

    /// Wire level (1-4)
    #[inline]
    pub fn level(self) -> u8 {
        self.depth()
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Ultimate => "Ultimate",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Normal),
            3 => Ok(Difficulty::Hard),
            4 => Ok(Difficulty::Ultimate),
            other => Err(other),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search tuning
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Moves searched at the root after ordering
    pub root_candidates: usize,
    /// Moves tried per interior node, unsorted
    pub ply_candidates: usize,
    /// Neighbourhood radius for root candidates
    pub root_distance: u8,
    /// Neighbourhood radius inside the search
    pub ply_distance: u8,
    /// Line shape scores
    pub patterns: PatternTable,
    /// Multiplier on the opponent's pattern scores in static evaluation
    pub defense_weight: Score,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root_candidates: 8,
            ply_candidates: 6,
            root_distance: 2,
            ply_distance: 1,
            patterns: PatternTable::DEFAULT,
            defense_weight: DEFENSE_WEIGHT,
        }
    }
}
