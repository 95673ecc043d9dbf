//! Colours and sizes for the Caro GUI

use egui::Color32;

use crate::Stone;

// Board
pub const WOOD: Color32 = Color32::from_rgb(222, 184, 135);
pub const INK: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_INK: Color32 = Color32::from_rgb(50, 35, 20);
pub const LAST_MOVE_DOT: Color32 = Color32::from_rgb(230, 60, 60);
pub const FIVE_GREEN: Color32 = Color32::from_rgb(50, 220, 50);

/// Paint for one side's stones
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoneInk {
    pub fill: Color32,
    /// Glint on dark stones, rim on light ones
    pub accent: Color32,
    pub shadow_alpha: u8,
}

pub const DARK_STONE: StoneInk = StoneInk {
    fill: Color32::from_rgb(25, 25, 30),
    accent: Color32::from_rgb(70, 70, 80),
    shadow_alpha: 60,
};

pub const LIGHT_STONE: StoneInk = StoneInk {
    fill: Color32::from_rgb(250, 250, 252),
    accent: Color32::from_rgb(190, 190, 195),
    shadow_alpha: 40,
};

/// Player one plays dark
pub fn stone_ink(stone: Stone) -> Option<StoneInk> {
    match stone {
        Stone::PlayerOne => Some(DARK_STONE),
        Stone::PlayerTwo => Some(LIGHT_STONE),
        Stone::Empty => None,
    }
}

pub fn blocked_cell() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panels
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_PANEL_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_STRONG: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SOFT: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_FAINT: Color32 = Color32::from_rgb(120, 125, 135);

// Move clock
pub const CLOCK_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const CLOCK_SLOW: Color32 = Color32::from_rgb(255, 180, 50);
pub const CLOCK_LATE: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const GRID_INSET: f32 = 40.0;
pub const STONE_SCALE: f32 = 0.45;
pub const STAR_RADIUS: f32 = 4.0;
pub const LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_RADIUS: f32 = 5.0;

/// Star points of the 15x15 grid
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];
