//! 24-bit RGB color type and predefined color constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents an opaque RGB color with 8-bit components.
///
/// Pixels are stored blue-first in the bitmap, so conversions to and from
/// the on-disk byte order go through [`Color::to_bgr`] and [`Color::from_bgr`].
///
/// # Examples
///
/// ```
/// use bmpedit::draw::Color;
/// let orange = Color::new(255, 128, 0);
/// assert_eq!(orange.to_bgr(), [0, 128, 255]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pixel bytes in file order.
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Reads a color from pixel bytes in file order.
    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self {
            r: bgr[2],
            g: bgr[1],
            b: bgr[0],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (255, 0, 0)
pub const RED: Color = Color::new(255, 0, 0);

/// Predefined green color (0, 255, 0)
pub const GREEN: Color = Color::new(0, 255, 0);

/// Predefined blue color (0, 0, 255)
pub const BLUE: Color = Color::new(0, 0, 255);

/// Predefined yellow color (255, 255, 0)
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Predefined orange color (255, 128, 0)
pub const ORANGE: Color = Color::new(255, 128, 0);

/// Predefined pink/magenta color (255, 0, 255)
pub const PINK: Color = Color::new(255, 0, 255);

/// Predefined white color (255, 255, 255)
pub const WHITE: Color = Color::new(255, 255, 255);

/// Predefined black color (0, 0, 0), also the default brush color
pub const BLACK: Color = Color::new(0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgr_order_swaps_red_and_blue() {
        let color = Color::new(1, 2, 3);
        assert_eq!(color.to_bgr(), [3, 2, 1]);
        assert_eq!(Color::from_bgr([3, 2, 1]), color);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(ORANGE.to_string(), "#ff8000");
        assert_eq!(Color::default(), BLACK);
    }
}
