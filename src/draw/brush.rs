//! Current drawing color and stroke size.

use super::color::{BLACK, Color};
use crate::error::ValidationError;

/// Largest stroke the brush accepts.
pub const MAX_BRUSH_SIZE: u8 = u8::MAX;

/// Brush used by every drawing operation of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// Stroke and fill color
    pub color: Color,
    /// Edge length of the square stamped for each drawn point (odd)
    pub size: u8,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: BLACK,
            size: 1,
        }
    }
}

impl Brush {
    /// Creates a brush, rejecting sizes that are not odd and positive.
    pub fn new(color: Color, size: i64) -> Result<Self, ValidationError> {
        let mut brush = Self { color, size: 1 };
        brush.set_size(size)?;
        Ok(brush)
    }

    /// Changes the stroke size; the brush is left untouched on error.
    pub fn set_size(&mut self, size: i64) -> Result<(), ValidationError> {
        let size = u8::try_from(size)
            .ok()
            .filter(|s| *s > 0)
            .ok_or(ValidationError::BrushSizeOutOfRange(size))?;
        if size % 2 == 0 {
            return Err(ValidationError::EvenBrushSize(size));
        }
        self.size = size;
        Ok(())
    }

    /// Half the stroke size, rounded down.
    pub fn half(&self) -> i32 {
        i32::from(self.size / 2)
    }

    /// Strokes need a symmetric brush.
    pub fn ensure_odd(&self) -> Result<(), ValidationError> {
        if self.size % 2 == 0 {
            Err(ValidationError::EvenBrushSize(self.size))
        } else {
            Ok(())
        }
    }
}
