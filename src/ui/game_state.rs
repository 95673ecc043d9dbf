//! Game flow for the GUI: turns, results, undo and the AI worker thread

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::rules::{find_winning_line, is_valid_move};
use crate::{AIEngine, Board, Difficulty, MoveResult, Pos, Stone};

/// Who sits at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One human against the engine
    PvE { human_color: Stone },
    /// Two humans on one machine, hints on request
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::PlayerOne,
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win {
        winner: Stone,
        winning_line: [Pos; 5],
    },
    /// Board filled without five in a row
    Draw,
}

/// Why a click did not place a stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("the AI is still thinking")]
    AiThinking,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("cell {0:?} is taken")]
    Occupied(Pos),
}

/// Engine search running on a worker thread
struct PendingSearch {
    receiver: Receiver<MoveResult>,
    started: Instant,
}

/// Clock for the side to move and the last AI search
#[derive(Debug, Clone, Copy)]
pub struct MoveTimer {
    turn_started: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl MoveTimer {
    fn running() -> Self {
        Self {
            turn_started: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }

    fn restart(&mut self) {
        self.turn_started = Some(Instant::now());
    }

    fn stop(&mut self) {
        self.turn_started = None;
    }

    /// Zero once the game is over
    pub fn elapsed(&self) -> Duration {
        self.turn_started.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Everything the GUI draws and advances
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    search: Option<PendingSearch>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            difficulty: Difficulty::default(),
            current_turn: Stone::PlayerOne,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            move_timer: MoveTimer::running(),
            suggested_move: None,
            message: None,
            search: None,
        }
    }

    /// Start over, keeping mode and difficulty
    pub fn reset(&mut self) {
        *self = Self {
            difficulty: self.difficulty,
            ..Self::new(self.mode)
        };
    }

    fn ai_color(&self) -> Option<Stone> {
        match self.mode {
            GameMode::PvE { human_color } => Some(human_color.opponent()),
            GameMode::PvP { .. } => None,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.ai_color() == Some(self.current_turn)
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_ai_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        self.search.is_some()
    }

    /// Play `pos` for the human whose turn it is
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(MoveError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }
        if !is_valid_move(&self.board, pos) {
            return Err(MoveError::Occupied(pos));
        }

        self.play(pos);
        Ok(())
    }

    /// Put the side to move's stone on `pos` and settle the result
    fn play(&mut self, pos: Pos) {
        let color = self.current_turn;
        self.board.place_stone(pos, color);
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;

        self.game_over = match find_winning_line(&self.board, pos, color) {
            Some(winning_line) => {
                log::info!("{color:?} wins with {winning_line:?}");
                Some(GameResult::Win {
                    winner: color,
                    winning_line,
                })
            }
            None if self.board.is_full() => Some(GameResult::Draw),
            None => None,
        };

        if self.game_over.is_some() {
            self.move_timer.stop();
        } else {
            self.current_turn = color.opponent();
            self.move_timer.restart();
        }
    }

    /// Hand a copy of the board to a worker thread when the engine is to move
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let board = self.board.clone();
        let (color, difficulty) = (self.current_turn, self.difficulty);
        thread::spawn(move || {
            let mut engine = AIEngine::new();
            let result = engine.get_move_with_stats(&board, color, difficulty);
            // The receiver is gone when the game was reset meanwhile
            let _ = tx.send(result);
        });

        self.search = Some(PendingSearch {
            receiver: rx,
            started: Instant::now(),
        });
    }

    /// Play the worker's move once it has arrived
    pub fn check_ai_result(&mut self) {
        let Some(search) = &self.search else {
            return;
        };
        let elapsed = search.started.elapsed();
        let result = match search.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.search = None;
                self.message = Some("AI worker stopped without a move".to_string());
                return;
            }
        };
        self.search = None;
        self.move_timer.ai_thinking_time = Some(elapsed);

        match result.best_move {
            Some(pos) if self.board.is_empty(pos) => self.play(pos),
            Some(pos) => self.message = Some(format!("AI picked taken cell {pos:?}")),
            None => self.message = Some("AI found no move".to_string()),
        }
        self.last_ai_result = Some(result);
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        self.search.as_ref().map(|s| s.started.elapsed())
    }

    /// Hint for the side to move, from the shallowest search
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let side = self.current_turn;
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&self.board, side, Difficulty::Easy);
        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Take back the last move. In PvE an AI reply goes together with the
    /// human move before it, so the human is to play again.
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let ai_moved_last = match (self.ai_color(), self.move_history.last()) {
            (Some(ai), Some(&(_, last))) => ai == last,
            _ => false,
        };
        let count = if ai_moved_last { 2 } else { 1 };
        let keep = self.move_history.len().saturating_sub(count);
        for (pos, color) in self.move_history.split_off(keep).into_iter().rev() {
            self.board.remove_stone(pos);
            self.current_turn = color;
        }

        self.last_move = self.move_history.last().map(|&(pos, _)| pos);
        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.restart();
    }
}
