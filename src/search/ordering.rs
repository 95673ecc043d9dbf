//! Move ordering for the root search
//!
//! A candidate is worth what it builds for the mover plus what it takes
//! away from the opponent by occupying the cell.

use crate::board::{Board, Pos, Stone};
use crate::eval::{score_point, PatternTable, Score};

/// Attack plus defence value of playing `pos`.
///
/// Tentatively places `color` and then the opponent on the empty cell and
/// scores each with [`score_point`]. The cell is empty again on return.
#[must_use]
pub fn quick_score(board: &mut Board, pos: Pos, color: Stone, table: &PatternTable) -> Score {
    let attack = {
        let trial = board.trial(pos, color);
        score_point(&trial, pos, color, table)
    };
    let opponent = color.opponent();
    let defend = {
        let trial = board.trial(pos, opponent);
        score_point(&trial, pos, opponent, table)
    };
    attack + defend
}

/// Sort `candidates` by [`quick_score`], best first.
///
/// The sort is stable: equal scores keep the order they were generated in.
#[must_use]
pub fn rank(board: &mut Board, candidates: &[Pos], color: Stone, table: &PatternTable) -> Vec<Pos> {
    let mut scored: Vec<(Score, Pos)> = candidates
        .iter()
        .map(|&pos| (quick_score(board, pos, color, table), pos))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, pos)| pos).collect()
}
