//! Win condition checking
//!
//! A stone wins when it completes five or more contiguous stones of its
//! color along a row, a column or either diagonal.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stones needed in a row to win
const WIN_LENGTH: i32 = 5;

/// A move is playable when it is on the board and the cell is empty.
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    Pos::is_valid(i32::from(pos.row), i32::from(pos.col)) && board.is_empty(pos)
}

/// Count `color` stones walking away from `pos` along `(dr, dc)`.
///
/// Stops at the board edge, at the first cell not holding `color`,
/// or after `WIN_LENGTH - 1` steps.
#[inline]
fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let mut count = 0;
    for k in 1..WIN_LENGTH {
        match pos.offset(dr, dc, k) {
            Some(p) if board.get(p) == color => count += 1,
            _ => break,
        }
    }
    count
}

/// Fast five-in-a-row check for a stone just placed at `pos`.
///
/// Only checks the 4 lines through `pos`. No allocation, no mutation.
#[inline]
pub fn is_winning_line(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + count_direction(board, pos, dr, dc, color)
            + count_direction(board, pos, -dr, -dc, color)
            >= WIN_LENGTH
    })
}

/// Find the five winning stones through `pos`, if any.
///
/// Returns the first five stones of the run, ordered along the line.
/// Used to highlight a finished game.
pub fn find_winning_line(board: &Board, pos: Pos, color: Stone) -> Option<[Pos; 5]> {
    if board.get(pos) != color {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, -dr, -dc, color);
        let forward = count_direction(board, pos, dr, dc, color);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        let start = pos.offset(-dr, -dc, back)?;
        let mut line = [start; 5];
        for (k, cell) in line.iter_mut().enumerate().skip(1) {
            *cell = start.offset(dr, dc, k as i32)?;
        }
        return Some(line);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(7, i), Stone::PlayerOne);
        }
        assert!(is_winning_line(&board, Pos::new(7, 2), Stone::PlayerOne));
        assert!(is_winning_line(&board, Pos::new(7, 4), Stone::PlayerOne));
        assert!(!is_winning_line(&board, Pos::new(7, 2), Stone::PlayerTwo));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 10..15 {
            board.place_stone(Pos::new(i, 3), Stone::PlayerTwo);
        }
        assert!(is_winning_line(&board, Pos::new(14, 3), Stone::PlayerTwo));
    }

    #[test]
    fn test_five_in_row_diagonals() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::PlayerOne);
            board.place_stone(Pos::new(i, 14 - i), Stone::PlayerTwo);
        }
        assert!(is_winning_line(&board, Pos::new(0, 0), Stone::PlayerOne));
        assert!(is_winning_line(&board, Pos::new(2, 12), Stone::PlayerTwo));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut board = Board::new();
        for i in 3..7 {
            board.place_stone(Pos::new(5, i), Stone::PlayerOne);
        }
        assert!(!is_winning_line(&board, Pos::new(5, 6), Stone::PlayerOne));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut board = Board::new();
        for i in [0, 1, 3, 4, 5] {
            board.place_stone(Pos::new(9, i), Stone::PlayerOne);
        }
        assert!(!is_winning_line(&board, Pos::new(9, 1), Stone::PlayerOne));
        assert!(!is_winning_line(&board, Pos::new(9, 3), Stone::PlayerOne));
    }

    #[test]
    fn test_opponent_stone_interrupts() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(1, i), Stone::PlayerOne);
        }
        board.remove_stone(Pos::new(1, 2));
        board.place_stone(Pos::new(1, 2), Stone::PlayerTwo);
        assert!(!is_winning_line(&board, Pos::new(1, 5), Stone::PlayerOne));
    }

    #[test]
    fn test_overline_wins() {
        let mut board = Board::new();
        for i in 2..9 {
            board.place_stone(Pos::new(12, i), Stone::PlayerTwo);
        }
        assert!(is_winning_line(&board, Pos::new(12, 5), Stone::PlayerTwo));
    }

    #[test]
    fn test_win_check_does_not_mutate() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(0, i), Stone::PlayerOne);
        }
        let before = board.clone();
        let _ = is_winning_line(&board, Pos::new(0, 0), Stone::PlayerOne);
        assert_eq!(board, before);
    }

    #[test]
    fn test_find_winning_line() {
        let mut board = Board::new();
        for i in 4..9 {
            board.place_stone(Pos::new(i, 13 - i), Stone::PlayerOne);
        }
        let hit = Pos::new(6, 7);
        let line = find_winning_line(&board, hit, Stone::PlayerOne).unwrap();
        assert_eq!(line[0], Pos::new(4, 9));
        assert_eq!(line[4], Pos::new(8, 5));

        assert!(find_winning_line(&board, hit, Stone::PlayerTwo).is_none());
        let corner = Pos::new(0, 0);
        assert_eq!(find_winning_line(&board, corner, Stone::PlayerOne), None);
    }

    #[test]
    fn test_is_valid_move() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::PlayerOne);
        assert!(!is_valid_move(&board, Pos::new(7, 7)));
        assert!(is_valid_move(&board, Pos::new(7, 8)));
    }
}
