//! Default colors for the built-in widgets

use panelkit_core::Color;

pub const SCREEN_BACKGROUND: Color = Color::rgba(0.05, 0.05, 0.07, 0.85);
pub const PANEL_BACKGROUND: Color = Color::rgba(0.12, 0.12, 0.15, 0.9);

pub const BUTTON_BACKGROUND: Color = Color::rgb(0.22, 0.22, 0.28);
pub const BUTTON_DISABLED: Color = Color::rgb(0.15, 0.15, 0.18);

pub const TEXT: Color = Color::WHITE;
pub const TEXT_DISABLED: Color = Color::GRAY;
/// Placeholder text in empty text boxes
pub const GHOST_TEXT: Color = Color::rgba(0.6, 0.6, 0.6, 0.8);

pub const TEXT_BOX_BACKGROUND: Color = Color::BLACK;
pub const TEXT_BOX_BORDER: Color = Color::DARK_GRAY;
pub const TEXT_BOX_BORDER_FOCUSED: Color = Color::rgb(0.85, 0.85, 0.85);

pub const SCROLL_TRACK: Color = Color::rgba(0.0, 0.0, 0.0, 0.5);
pub const SCROLL_THUMB: Color = Color::rgb(0.45, 0.45, 0.5);

/// Inner horizontal padding of text boxes
pub const TEXT_PADDING: i32 = 4;
