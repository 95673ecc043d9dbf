//! Board painting and click handling for the Caro GUI

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use super::game_state::{GameResult, GameState};
use super::theme::*;
use crate::rules::is_valid_move;
use crate::{Board, Pos, Stone, BOARD_SIZE};

/// Screen placement of the grid: the top-left intersection and the spacing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct BoardLayout {
    first: Pos2,
    step: f32,
}

impl BoardLayout {
    /// Fit the grid into a square `rect`, leaving room for labels
    fn fit(rect: Rect) -> Self {
        let step = (rect.width() - 2.0 * GRID_INSET) / (BOARD_SIZE as f32 - 1.0);
        Self {
            first: rect.min + Vec2::splat(GRID_INSET),
            step,
        }
    }

    fn span(&self) -> f32 {
        self.step * (BOARD_SIZE as f32 - 1.0)
    }

    fn stone_radius(&self) -> f32 {
        self.step * STONE_SCALE
    }

    fn center(&self, pos: Pos) -> Pos2 {
        self.first + Vec2::new(pos.col as f32, pos.row as f32) * self.step
    }

    /// Intersection nearest to `point`, if it is on the board
    fn cell_at(&self, point: Pos2) -> Option<Pos> {
        let grid = (point - self.first) / self.step;
        let (row, col) = (grid.y.round() as i32, grid.x.round() as i32);
        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }
}

/// Paints the board and turns clicks into cells
#[derive(Default)]
pub struct BoardView {
    layout: BoardLayout,
}

impl BoardView {
    /// Draw `game` and return the cell the human clicked, if it can be played
    pub fn show(&mut self, ui: &mut Ui, game: &GameState) -> Option<Pos> {
        let avail = ui.available_size();
        let side = avail.x.min(avail.y) - 20.0;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.layout = BoardLayout::fit(response.rect);

        painter.rect_filled(response.rect, CornerRadius::same(4), WOOD);
        self.paint_grid(&painter);
        self.paint_labels(&painter);
        self.paint_stones(&painter, &game.board);
        self.paint_markers(&painter, game);

        let idle = game.game_over.is_none() && !game.is_ai_thinking();
        if !idle || !game.is_human_turn() {
            return None;
        }

        let cell = response.hover_pos().and_then(|p| self.layout.cell_at(p))?;
        let open = is_valid_move(&game.board, cell);
        self.paint_hover(&painter, cell, game.current_turn, open);
        (response.clicked() && open).then_some(cell)
    }

    fn paint_grid(&self, painter: &Painter) {
        let BoardLayout { first, step } = self.layout;
        let span = self.layout.span();
        let stroke = Stroke::new(LINE_WIDTH, INK);

        for i in 0..BOARD_SIZE {
            let at = i as f32 * step;
            let across = [first + Vec2::new(0.0, at), first + Vec2::new(span, at)];
            let down = [first + Vec2::new(at, 0.0), first + Vec2::new(at, span)];
            painter.line_segment(across, stroke);
            painter.line_segment(down, stroke);
        }
        for (row, col) in STAR_POINTS {
            let star = self.layout.center(Pos::new(row, col));
            painter.circle_filled(star, STAR_RADIUS, STAR_INK);
        }
    }

    /// Row and column indices as the move service reports them (x = row, y = col)
    fn paint_labels(&self, painter: &Painter) {
        let BoardLayout { first, step } = self.layout;
        let font = FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let at = i as f32 * step;
            let label = i.to_string();
            let top = Pos2::new(first.x + at, first.y - GRID_INSET + 12.0);
            let left = Pos2::new(first.x - GRID_INSET + 14.0, first.y + at);
            for spot in [top, left] {
                painter.text(spot, Align2::CENTER_CENTER, &label, font.clone(), INK);
            }
        }
    }

    fn paint_stones(&self, painter: &Painter, board: &Board) {
        let radius = self.layout.stone_radius();
        for stone in [Stone::PlayerOne, Stone::PlayerTwo] {
            if let Some(bits) = board.stones(stone) {
                for pos in bits.iter_ones() {
                    paint_stone(painter, self.layout.center(pos), radius, stone);
                }
            }
        }
    }

    /// Last move dot, winning five and the hint stone
    fn paint_markers(&self, painter: &Painter, game: &GameState) {
        let layout = self.layout;
        if let Some(pos) = game.last_move {
            painter.circle_filled(layout.center(pos), LAST_MOVE_RADIUS, LAST_MOVE_DOT);
        }
        if let Some(GameResult::Win { winning_line, .. }) = game.game_over {
            let stroke = Stroke::new(4.0, FIVE_GREEN);
            for pair in winning_line.windows(2) {
                painter.line_segment([layout.center(pair[0]), layout.center(pair[1])], stroke);
            }
            for pos in winning_line {
                painter.circle_stroke(layout.center(pos), layout.stone_radius() + 3.0, stroke);
            }
        }
        if let Some(pos) = game.suggested_move {
            paint_hint(painter, layout, pos, game.current_turn);
        }
    }

    fn paint_hover(&self, painter: &Painter, pos: Pos, turn: Stone, open: bool) {
        let color = if open {
            ghost(turn, 80)
        } else {
            Some(blocked_cell())
        };
        if let Some(color) = color {
            painter.circle_filled(self.layout.center(pos), self.layout.stone_radius(), color);
        }
    }
}

fn paint_stone(painter: &Painter, center: Pos2, radius: f32, stone: Stone) {
    let Some(ink) = stone_ink(stone) else {
        return;
    };
    let shadow = Color32::from_black_alpha(ink.shadow_alpha);
    painter.circle_filled(center + Vec2::splat(2.0), radius, shadow);
    painter.circle_filled(center, radius, ink.fill);

    if stone == Stone::PlayerOne {
        let glint = center - Vec2::splat(radius * 0.3);
        painter.circle_filled(glint, radius * 0.2, ink.accent);
    } else {
        let rim = Stroke::new(radius * 0.1, ink.accent);
        painter.circle_stroke(center, radius * 0.85, rim);
    }
}

/// Translucent stone marked "?" in the other side's colour
fn paint_hint(painter: &Painter, layout: BoardLayout, pos: Pos, turn: Stone) {
    let (Some(fill), Some(mark)) = (ghost(turn, 100), stone_ink(turn.opponent())) else {
        return;
    };
    let center = layout.center(pos);
    painter.circle_filled(center, layout.stone_radius(), fill);
    let font = FontId::proportional(14.0);
    painter.text(center, Align2::CENTER_CENTER, "?", font, mark.fill);
}

/// See-through version of a side's stone colour
fn ghost(turn: Stone, alpha: u8) -> Option<Color32> {
    let fill = stone_ink(turn)?.fill;
    let [r, g, b, _] = fill.to_array();
    Some(Color32::from_rgba_unmultiplied(r, g, b, alpha))
}
