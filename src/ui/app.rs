//! Main application for the Caro GUI
//!
//! Menus, buttons and keyboard shortcuts all produce [`Action`]s; they are
//! collected while a frame is drawn and applied once it is done.

use eframe::egui;
use egui::{Button, Color32, Context, CornerRadius, Frame, Key, RichText, Ui};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;
use crate::search::is_decisive;
use crate::{Difficulty, MoveResult, Stone};

/// Something the user asked for this frame
#[derive(Debug, Clone, Copy)]
enum Action {
    NewGame(GameMode),
    Restart,
    Undo,
    Hint,
    ToggleDebug,
    SetDifficulty(Difficulty),
}

const fn vs_ai(human_color: Stone) -> GameMode {
    GameMode::PvE { human_color }
}

const fn hotseat(show_suggestions: bool) -> GameMode {
    GameMode::PvP { show_suggestions }
}

const NEW_GAME_MODES: [(&str, GameMode); 4] = [
    ("vs AI, play X (first)", vs_ai(Stone::PlayerOne)),
    ("vs AI, play O (second)", vs_ai(Stone::PlayerTwo)),
    ("Two players", hotseat(true)),
    ("Two players, no hints", hotseat(false)),
];

const SHORTCUTS: [(Key, Action); 8] = [
    (Key::D, Action::ToggleDebug),
    (Key::H, Action::Hint),
    (Key::U, Action::Undo),
    (Key::N, Action::Restart),
    (Key::Num1, Action::SetDifficulty(Difficulty::Easy)),
    (Key::Num2, Action::SetDifficulty(Difficulty::Normal)),
    (Key::Num3, Action::SetDifficulty(Difficulty::Hard)),
    (Key::Num4, Action::SetDifficulty(Difficulty::Ultimate)),
];

/// Main Caro application
pub struct CaroApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for CaroApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl CaroApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::NewGame(mode) => {
                let difficulty = self.state.difficulty;
                self.state = GameState::new(mode);
                self.state.difficulty = difficulty;
            }
            Action::Restart => self.state.reset(),
            Action::Undo => self.state.undo(),
            Action::Hint => {
                if self.hints_enabled() {
                    self.state.request_suggestion();
                }
            }
            Action::ToggleDebug => self.show_debug = !self.show_debug,
            Action::SetDifficulty(difficulty) => self.state.difficulty = difficulty,
        }
    }

    fn hints_enabled(&self) -> bool {
        match self.state.mode {
            GameMode::PvP { show_suggestions } => show_suggestions,
            GameMode::PvE { .. } => false,
        }
    }

    fn mode_summary(&self) -> String {
        match self.state.mode {
            GameMode::PvE { human_color } => {
                let you = player_name(human_color);
                format!("vs AI ({}) - you are {you}", self.state.difficulty)
            }
            GameMode::PvP { .. } => "Two players".to_string(),
        }
    }

    fn menu_bar(&self, ctx: &Context, actions: &mut Vec<Action>) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for (label, mode) in NEW_GAME_MODES {
                        if ui.button(label).clicked() {
                            actions.push(Action::NewGame(mode));
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        actions.push(Action::Undo);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in Difficulty::ALL {
                        let selected = self.state.difficulty == difficulty;
                        let label = format!("{difficulty} (depth {})", difficulty.depth());
                        if ui.radio(selected, label).clicked() {
                            actions.push(Action::SetDifficulty(difficulty));
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.selectable_label(self.show_debug, "Engine (D)").clicked() {
                        actions.push(Action::ToggleDebug);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.mode_summary());
                });
            });
        });
    }

    fn side_panel(&self, ctx: &Context, actions: &mut Vec<Action>) {
        egui::SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.heading(RichText::new("CARO").strong().color(TEXT_STRONG));
                ui.label(caption("five in a row, 15x15"));
                ui.add_space(8.0);

                section(ui, "TO PLAY", |ui| self.status_section(ui));
                section(ui, "DIFFICULTY", |ui| self.difficulty_section(ui, actions));
                section(ui, "ACTIONS", |ui| self.actions_section(ui, actions));
                if self.show_debug {
                    section(ui, "ENGINE", |ui| self.engine_section(ui));
                }
                if let Some(result) = self.state.game_over {
                    section(ui, "GAME OVER", |ui| outcome_section(ui, result, actions));
                }
                if let Some(msg) = &self.state.message {
                    ui.colored_label(CLOCK_SLOW, format!("! {msg}"));
                }
            });
    }

    fn status_section(&self, ui: &mut Ui) {
        let turn = self.state.current_turn;
        ui.horizontal(|ui| {
            stone_badge(ui, turn);
            ui.vertical(|ui| {
                ui.label(RichText::new(player_name(turn)).size(16.0).strong());
                let (status, color) = self.status_line();
                ui.label(RichText::new(status).color(color));
            });
        });
        ui.add_space(6.0);

        let (label, secs) = match self.state.ai_thinking_elapsed() {
            Some(elapsed) => ("AI", elapsed.as_secs_f32()),
            None => ("Move", self.state.move_timer.elapsed().as_secs_f32()),
        };
        let color = if self.state.is_ai_thinking() {
            timer_color(secs)
        } else {
            TEXT_STRONG
        };
        let clock = RichText::new(format!("{secs:.1}s")).size(20.0);
        ui.horizontal(|ui| {
            ui.label(caption(label));
            ui.label(clock.color(color));
        });

        if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
            let ai_secs = ai_time.as_secs_f32();
            ui.label(detail(format!("last AI move {ai_secs:.3}s")));
        }
    }

    fn status_line(&self) -> (&'static str, Color32) {
        if self.state.game_over.is_some() {
            ("Game over", FIVE_GREEN)
        } else if self.state.is_ai_thinking() {
            ("AI thinking...", CLOCK_SLOW)
        } else if self.state.is_human_turn() {
            ("Your move", CLOCK_OK)
        } else {
            ("Waiting for AI", TEXT_SOFT)
        }
    }

    /// A change applies from the next AI move on
    fn difficulty_section(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.horizontal_wrapped(|ui| {
            for difficulty in Difficulty::ALL {
                let selected = self.state.difficulty == difficulty;
                if ui.selectable_label(selected, difficulty.label()).clicked() {
                    actions.push(Action::SetDifficulty(difficulty));
                }
            }
        });
        let depth = self.state.difficulty.depth();
        ui.label(detail(format!("search depth {depth}")));
    }

    fn actions_section(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        let idle = !self.state.is_ai_thinking();
        let can_undo = idle && !self.state.move_history.is_empty();
        ui.horizontal(|ui| {
            if ui.add_enabled(can_undo, Button::new("Undo")).clicked() {
                actions.push(Action::Undo);
            }
            if self.hints_enabled() && ui.button("Hint").clicked() {
                actions.push(Action::Hint);
            }
            if ui.button("Restart").clicked() {
                actions.push(Action::Restart);
            }
        });
        let moves = self.state.move_history.len();
        ui.label(detail(format!("{moves} stones played")));
    }

    fn engine_section(&self, ui: &mut Ui) {
        let Some(result) = &self.state.last_ai_result else {
            ui.label(caption("no search yet"));
            return;
        };

        let grid = egui::Grid::new("engine_stats").num_columns(2);
        grid.show(ui, |ui| {
            for (name, value) in stat_rows(result) {
                ui.label(caption(name));
                ui.label(detail(value));
                ui.end_row();
            }
        });
        if let Some(pos) = result.best_move {
            let played = RichText::new(format!("-> ({}, {})", pos.row, pos.col));
            ui.label(played.strong().color(FIVE_GREEN));
        }
    }

    fn board_panel(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(Frame::new().fill(BOARD_PANEL_BG))
            .show(ctx, |ui| {
                if let Some(pos) = self.board_view.show(ui, &self.state) {
                    if let Err(err) = self.state.try_place_stone(pos) {
                        self.state.message = Some(err.to_string());
                    }
                }
            });
    }
}

impl eframe::App for CaroApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut actions = pressed_shortcuts(ctx);
        self.state.check_ai_result();
        self.state.start_ai_thinking();

        self.menu_bar(ctx, &mut actions);
        self.side_panel(ctx, &mut actions);
        self.board_panel(ctx);

        let changed = !actions.is_empty();
        for action in actions {
            self.apply(action);
        }
        if changed || self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

fn pressed_shortcuts(ctx: &Context) -> Vec<Action> {
    ctx.input(|i| {
        SHORTCUTS
            .iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|&(_, action)| action)
            .collect()
    })
}

fn player_name(stone: Stone) -> &'static str {
    match stone {
        Stone::PlayerOne => "PLAYER 1 (X)",
        Stone::PlayerTwo => "PLAYER 2 (O)",
        Stone::Empty => "-",
    }
}

fn caption(text: impl Into<String>) -> RichText {
    RichText::new(text).size(10.0).color(TEXT_FAINT)
}

fn detail(text: impl Into<String>) -> RichText {
    RichText::new(text).size(11.0).color(TEXT_SOFT)
}

/// Titled card in the side panel
fn section(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    Frame::new()
        .fill(CARD_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(caption(title));
            ui.add_space(4.0);
            add_contents(ui);
        });
    ui.add_space(8.0);
}

fn stone_badge(ui: &mut Ui, stone: Stone) {
    let size = egui::Vec2::splat(36.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let ink = stone_ink(stone).unwrap_or(DARK_STONE);
    let rim = egui::Stroke::new(2.0, ink.accent);
    ui.painter().circle(rect.center(), 16.0, ink.fill, rim);
}

fn timer_color(secs: f32) -> Color32 {
    match secs {
        s if s < 1.0 => CLOCK_OK,
        s if s < 3.0 => CLOCK_SLOW,
        _ => CLOCK_LATE,
    }
}

/// Label and value rows of the engine card
fn stat_rows(result: &MoveResult) -> [(&'static str, String); 7] {
    let outlook = match (is_decisive(result.score), result.score > 0.0) {
        (true, true) => "forced win",
        (true, false) => "forced loss",
        (false, _) => "open",
    };
    [
        ("phase", format!("{:?}", result.search_type)),
        ("score", format!("{:.1}", result.score)),
        ("outlook", outlook.to_string()),
        ("depth", result.depth.to_string()),
        ("time", format!("{} ms", result.time_ms)),
        ("nodes", result.nodes.to_string()),
        ("cutoffs", result.cutoffs.to_string()),
    ]
}

fn outcome_section(ui: &mut Ui, result: GameResult, actions: &mut Vec<Action>) {
    let (headline, reason) = match result {
        GameResult::Win { winner, .. } => {
            (format!("{} wins", player_name(winner)), "five in a row")
        }
        GameResult::Draw => ("Draw".to_string(), "the board is full"),
    };
    ui.vertical_centered(|ui| {
        let title = RichText::new(headline).size(18.0).strong();
        ui.label(title.color(FIVE_GREEN));
        ui.label(detail(reason));
        if ui.button("New game (N)").clicked() {
            actions.push(Action::Restart);
        }
    });
}
