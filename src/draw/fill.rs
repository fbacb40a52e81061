//! Flood fill of 4-connected regions.

use super::brush::Brush;
use crate::image::PixelBuffer;

/// What a fill request did to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// Nothing to do: the seed is outside the image or already has the brush color.
    Unchanged,
    /// This many pixels were recolored.
    Filled(usize),
}

/// Recolors the region around `(y, x)` that shares the seed's color.
///
/// Neighbours are visited in the order `y + 1`, `x + 1`, `y - 1`, `x - 1`
/// using an explicit stack, so region size is bounded by memory rather than
/// call depth. A pixel is recolored only while it still has the seed's
/// original color, which also keeps it from being visited twice.
pub fn fill(buffer: &mut PixelBuffer, brush: &Brush, y: i32, x: i32) -> FillOutcome {
    let Some(target) = buffer.pixel(y, x) else {
        return FillOutcome::Unchanged;
    };
    if target == brush.color {
        return FillOutcome::Unchanged;
    }

    let mut filled = 0;
    let mut stack = vec![(y, x)];
    while let Some((y, x)) = stack.pop() {
        if buffer.pixel(y, x) != Some(target) {
            continue;
        }
        buffer.set_pixel(y, x, brush.color);
        filled += 1;

        // Pushed in reverse so the first neighbour is popped first.
        stack.push((y, x - 1));
        stack.push((y - 1, x));
        stack.push((y, x + 1));
        stack.push((y + 1, x));
    }

    FillOutcome::Filled(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::raster;
    use crate::draw::{BLACK, BLUE, RED, WHITE};

    fn brush() -> Brush {
        Brush {
            color: RED,
            size: 1,
        }
    }

    #[test]
    fn fill_on_brush_colored_buffer_is_noop() {
        let mut buffer = PixelBuffer::filled(4, 3, RED).unwrap();
        let before = buffer.clone();
        assert_eq!(fill(&mut buffer, &brush(), 1, 1), FillOutcome::Unchanged);
        assert_eq!(buffer, before);
    }

    #[test]
    fn fill_recolors_whole_uniform_buffer() {
        let mut buffer = PixelBuffer::filled(7, 5, WHITE).unwrap();
        assert_eq!(fill(&mut buffer, &brush(), 3, 2), FillOutcome::Filled(35));
        assert_eq!(buffer.count_color(RED), 35);
    }

    #[test]
    fn fill_stops_at_region_boundary() {
        // A vertical black wall at y = 3 splits a 7x4 canvas.
        let mut buffer = PixelBuffer::filled(7, 4, WHITE).unwrap();
        let wall = Brush {
            color: BLACK,
            size: 1,
        };
        raster::line(&mut buffer, &wall, 3, 0, 3, 3).unwrap();

        assert_eq!(fill(&mut buffer, &brush(), 0, 0), FillOutcome::Filled(12));
        assert_eq!(buffer.count_color(RED), 12);
        assert_eq!(buffer.count_color(BLACK), 4);
        assert_eq!(buffer.pixel(4, 0), Some(WHITE));
    }

    #[test]
    fn fill_is_four_connected() {
        let mut buffer = PixelBuffer::filled(3, 3, WHITE).unwrap();
        buffer.set_pixel(0, 0, BLUE);
        buffer.set_pixel(1, 1, BLUE);
        assert_eq!(fill(&mut buffer, &brush(), 0, 0), FillOutcome::Filled(1));
        assert_eq!(buffer.pixel(1, 1), Some(BLUE));
    }

    #[test]
    fn seed_outside_image_does_nothing() {
        let mut buffer = PixelBuffer::filled(3, 2, WHITE).unwrap();
        assert_eq!(fill(&mut buffer, &brush(), 2, 2), FillOutcome::Unchanged);
        assert_eq!(fill(&mut buffer, &brush(), -1, 0), FillOutcome::Unchanged);
        assert_eq!(buffer.count_color(RED), 0);
    }

    #[test]
    fn large_region_does_not_overflow_the_stack() {
        let mut buffer = PixelBuffer::filled(1000, 1000, WHITE).unwrap();
        assert_eq!(
            fill(&mut buffer, &brush(), 500, 500),
            FillOutcome::Filled(1_000_000)
        );
    }
}
