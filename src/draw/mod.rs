//! Drawing on a [`PixelBuffer`](crate::image::PixelBuffer).
//!
//! This module defines the editing operations applied to a loaded image:
//! - [`Color`]: 8-bit RGB color with predefined constants
//! - [`Brush`]: current color and stroke size
//! - [`raster`]: dot, line, rectangle and triangle strokes
//! - [`fill`]: 4-connected flood fill
//! - [`compose`]: pasting another bitmap at an offset

pub mod brush;
pub mod color;
pub mod compose;
pub mod fill;
pub mod raster;

// Re-export commonly used types at module level
pub use brush::Brush;
pub use color::Color;
pub use fill::FillOutcome;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
