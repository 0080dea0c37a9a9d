use bevy::prelude::*;

pub const TRANSLUCENT: Color = Color::srgba(0.0, 0.0, 0.0, 0.55);
pub const PANEL_BG: Color = Color::srgba(0.08, 0.08, 0.12, 0.92);

pub const BUTTON_BG: Color = Color::srgb(0.17, 0.17, 0.24);
pub const BUTTON_HOVERED_BG: Color = Color::srgb(0.24, 0.24, 0.34);
pub const BUTTON_PRESSED_BG: Color = Color::srgb(0.34, 0.30, 0.20);

pub const TEXT: Color = Color::srgb(0.92, 0.92, 0.95);
pub const TEXT_DIM: Color = Color::srgb(0.65, 0.65, 0.72);
pub const SCORE_RED: Color = Color::srgb(1.0, 0.27, 0.27);
pub const GOOD_GREEN: Color = Color::srgb(0.27, 1.0, 0.27);
pub const WARN_YELLOW: Color = Color::srgb(1.0, 0.78, 0.27);
