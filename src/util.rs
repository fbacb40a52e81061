//! Color name helpers shared by configuration and logging.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name, or "Custom".
pub fn color_to_name(color: &Color) -> &'static str {
    match *color {
        RED => "Red",
        GREEN => "Green",
        BLUE => "Blue",
        YELLOW => "Yellow",
        ORANGE => "Orange",
        PINK => "Pink",
        WHITE => "White",
        BLACK => "Black",
        _ => "Custom",
    }
}
