//! Color palette and the semantic-class mapping used by the renderer.

use ratatui::style::Color;

pub const PRIMARY: Color = Color::Rgb(33, 150, 243);
pub const PRIMARY_DARK: Color = Color::Rgb(25, 118, 210);
pub const SUCCESS: Color = Color::Rgb(76, 175, 80);
pub const WARNING: Color = Color::Rgb(255, 193, 7);
pub const DANGER: Color = Color::Rgb(244, 67, 54);
pub const TEXT: Color = Color::Rgb(238, 238, 238);
pub const TEXT_MUTED: Color = Color::Rgb(158, 158, 158);
pub const BORDER: Color = Color::Rgb(97, 97, 97);

/// Color carried by a semantic class name, if any.
pub fn class_color(class: &str) -> Option<Color> {
    match class {
        "primary" | "btn-primary" | "info" => Some(PRIMARY),
        "secondary" | "btn-secondary" | "success" => Some(SUCCESS),
        "warning" | "maintenance" => Some(WARNING),
        "danger" | "btn-danger" | "alert" | "offline" => Some(DANGER),
        "online" => Some(SUCCESS),
        "muted" | "subtitle" | "page-subtitle" => Some(TEXT_MUTED),
        _ => None,
    }
}
