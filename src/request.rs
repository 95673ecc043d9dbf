//! Request boundary: untyped grids and player ids in, a move out.
//!
//! Clients send a JSON object such as
//!
//! ```json
//! { "board": [[0, 0, ...], ...], "currentPlayer": 1, "difficulty": 2 }
//! ```
//!
//! and get `{ "x": row, "y": col }` back, with `-1, -1` when the board has
//! no empty cell. Everything the engine takes as a precondition is checked
//! here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BoardError, Stone};
use crate::config::Difficulty;
use crate::engine::AIEngine;

/// Errors surfaced at the request boundary
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("invalid player {0}, expected 1 or 2")]
    InvalidPlayer(u8),
    #[error("invalid difficulty {0}, expected 1 to 4")]
    InvalidDifficulty(u8),
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

/// Incoming move request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub board: Vec<Vec<u8>>,
    pub current_player: u8,
    pub difficulty: u8,
}

/// Chosen cell: `x` is the row, `y` the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub x: i32,
    pub y: i32,
}

impl MoveResponse {
    /// Answer for a board with no empty cell
    pub const NO_MOVE: MoveResponse = MoveResponse { x: -1, y: -1 };
}

/// Error body returned in place of a [`MoveResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&RequestError> for ErrorResponse {
    fn from(err: &RequestError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Validated request, ready for the engine
#[derive(Debug, Clone)]
pub struct ParsedRequest {
    pub board: Board,
    pub player: Stone,
    pub difficulty: Difficulty,
}

impl MoveRequest {
    /// Check the grid, the player id and the difficulty level.
    pub fn parse(&self) -> Result<ParsedRequest, RequestError> {
        parse_parts(&self.board, self.current_player, self.difficulty)
    }
}

fn parse_parts<R: AsRef<[u8]>>(
    grid: &[R],
    player_id: u8,
    difficulty: u8,
) -> Result<ParsedRequest, RequestError> {
    let board = Board::from_grid(grid)?;
    let player = Stone::from_player_id(player_id).ok_or(RequestError::InvalidPlayer(player_id))?;
    let difficulty = Difficulty::try_from(difficulty).map_err(RequestError::InvalidDifficulty)?;
    Ok(ParsedRequest {
        board,
        player,
        difficulty,
    })
}

/// Validate the inputs and return the engine's move as `(row, col)`.
///
/// `Ok(None)` means the board is full.
pub fn compute_best_move(
    board: &[Vec<u8>],
    current_player: u8,
    difficulty: u8,
) -> Result<Option<(usize, usize)>, RequestError> {
    let req = parse_parts(board, current_player, difficulty)?;
    let mut engine = AIEngine::new();
    let pos = engine.get_move(&req.board, req.player, req.difficulty);
    Ok(pos.map(|p| (usize::from(p.row), usize::from(p.col))))
}

/// Run one request through `engine`.
pub fn handle_request(
    engine: &mut AIEngine,
    request: &MoveRequest,
) -> Result<MoveResponse, RequestError> {
    let req = request.parse()?;
    log::debug!(
        "--- thinking (level {}, depth {}) ---",
        req.difficulty.level(),
        req.difficulty.depth()
    );

    let result = engine.get_move_with_stats(&req.board, req.player, req.difficulty);
    Ok(match result.best_move {
        Some(pos) => MoveResponse {
            x: i32::from(pos.row),
            y: i32::from(pos.col),
        },
        None => MoveResponse::NO_MOVE,
    })
}

/// Parse a JSON request, run it and serialise the reply.
///
/// Errors become `{"error": "..."}` bodies so a serving loop can keep going.
pub fn handle_json(engine: &mut AIEngine, line: &str) -> String {
    let outcome = serde_json::from_str::<MoveRequest>(line)
        .map_err(RequestError::from)
        .and_then(|request| handle_request(engine, &request));

    let body = match outcome {
        Ok(response) => serde_json::to_string(&response),
        Err(err) => {
            log::warn!("rejected request: {err}");
            serde_json::to_string(&ErrorResponse::from(&err))
        }
    };
    // Both bodies are plain structs of strings and integers
    body.unwrap_or_else(|_| String::from(r#"{"error":"serialization failed"}"#))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn empty_grid() -> Vec<Vec<u8>> {
        vec![vec![0; BOARD_SIZE]; BOARD_SIZE]
    }

    #[test]
    fn test_compute_empty_board_center() {
        let grid = empty_grid();
        assert_eq!(compute_best_move(&grid, 1, 2).unwrap(), Some((7, 7)));
    }

    #[test]
    fn test_compute_rejects_bad_inputs() {
        let grid = empty_grid();
        let bad = |player, level| compute_best_move(&grid, player, level).unwrap_err();
        assert!(matches!(bad(3, 2), RequestError::InvalidPlayer(3)));
        assert!(matches!(bad(0, 2), RequestError::InvalidPlayer(0)));
        assert!(matches!(bad(1, 5), RequestError::InvalidDifficulty(5)));
        assert!(matches!(bad(1, 0), RequestError::InvalidDifficulty(0)));

        let short = vec![vec![0; BOARD_SIZE]; BOARD_SIZE - 1];
        let err = compute_best_move(&short, 1, 2).unwrap_err();
        assert!(matches!(err, RequestError::Board(BoardError::RowCount(14))));

        let mut bad_cell = empty_grid();
        bad_cell[4][4] = 7;
        let expected = BoardError::InvalidCell {
            row: 4,
            col: 4,
            value: 7,
        };
        let err = compute_best_move(&bad_cell, 1, 2).unwrap_err();
        assert!(matches!(err, RequestError::Board(e) if e == expected));
    }

    #[test]
    fn test_request_uses_camel_case() {
        let json = format!(
            r#"{{"board": {}, "currentPlayer": 2, "difficulty": 3}}"#,
            serde_json::to_string(&empty_grid()).unwrap()
        );
        let request: MoveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.current_player, 2);
        assert_eq!(request.difficulty, 3);

        let back = serde_json::to_value(&request).unwrap();
        assert!(back.get("currentPlayer").is_some());
        assert!(back.get("current_player").is_none());
    }

    #[test]
    fn test_handle_request_block() {
        let mut grid = empty_grid();
        for c in 3..7 {
            grid[5][c] = 2;
        }
        grid[9][9] = 1;
        let request = MoveRequest {
            board: grid,
            current_player: 1,
            difficulty: 2,
        };

        let mut engine = AIEngine::new();
        let response = handle_request(&mut engine, &request).unwrap();
        assert_eq!(response.x, 5);
        assert!(response.y == 2 || response.y == 7, "got {response:?}");
    }

    #[test]
    fn test_handle_json_full_board() {
        let mut grid = empty_grid();
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = if (c / 2 + r) % 2 == 0 { 1 } else { 2 };
            }
        }
        let line = serde_json::to_string(&MoveRequest {
            board: grid,
            current_player: 1,
            difficulty: 1,
        })
        .unwrap();

        let mut engine = AIEngine::new();
        assert_eq!(handle_json(&mut engine, &line), r#"{"x":-1,"y":-1}"#);
    }

    #[test]
    fn test_handle_json_errors() {
        let mut engine = AIEngine::new();

        let body = handle_json(&mut engine, "not json");
        let reply: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert!(reply.error.starts_with("malformed request"));

        let line = serde_json::to_string(&MoveRequest {
            board: empty_grid(),
            current_player: 9,
            difficulty: 2,
        })
        .unwrap();
        let body = handle_json(&mut engine, &line);
        let reply: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(reply.error, "invalid player 9, expected 1 or 2");
    }
}
