//! Stroke primitives: dot, line, rectangle and triangle outlines.
//!
//! Coordinates are `(y, x)` pairs as described on [`PixelBuffer`]: `y` is
//! clipped against the image width and `x` against its height. Points
//! outside the image are clipped, never rejected.

use super::brush::Brush;
use crate::error::ValidationError;
use crate::image::PixelBuffer;
use std::ops::RangeInclusive;

/// Stamps a `brush.size` square centered on `(y, x)`, clipped to the image.
pub fn dot(buffer: &mut PixelBuffer, brush: &Brush, y: i32, x: i32) {
    let half = brush.half();
    let rows = x.saturating_sub(half).max(0)..x.saturating_add(half + 1).min(buffer.height());
    let cols = y.saturating_sub(half).max(0)..y.saturating_add(half + 1).min(buffer.width());

    for row in rows {
        for col in cols.clone() {
            buffer.set_pixel(col, row, brush.color);
        }
    }
}

/// Draws a straight stroke from `(y1, x1)` to `(y2, x2)`, both ends included.
///
/// The loop runs along whichever axis spans the larger distance (the `y`
/// axis on ties) and derives the other coordinate with truncating integer
/// interpolation, so results match the classic editor pixel for pixel.
///
/// # Errors
/// Fails when the brush size is even.
pub fn line(
    buffer: &mut PixelBuffer,
    brush: &Brush,
    y1: i32,
    x1: i32,
    y2: i32,
    x2: i32,
) -> Result<(), ValidationError> {
    brush.ensure_odd()?;

    if y1 == y2 && x1 == x2 {
        dot(buffer, brush, y1, x1);
        return Ok(());
    }

    let half = i64::from(brush.half());
    let width = i64::from(buffer.width());
    let height = i64::from(buffer.height());
    let (y1, x1, y2, x2) = (
        i64::from(y1),
        i64::from(x1),
        i64::from(y2),
        i64::from(x2),
    );

    if x1 == x2 {
        for y in visible(y1.min(y2), y1.max(y2), width, half) {
            dot(buffer, brush, y as i32, x1 as i32);
        }
        return Ok(());
    }

    if y1 == y2 {
        for x in visible(x1.min(x2), x1.max(x2), height, half) {
            dot(buffer, brush, y1 as i32, x as i32);
        }
        return Ok(());
    }

    if (x1 - x2).abs() <= (y1 - y2).abs() {
        // Closer to vertical: step along y.
        let (y1, x1, y2, x2) = if y1 > y2 {
            (y2, x2, y1, x1)
        } else {
            (y1, x1, y2, x2)
        };
        let (dist_x, dist_y) = (x2 - x1, y2 - y1);
        for y in visible(y1, y2, width, half) {
            let x = interpolate(dist_x, y - y1, dist_y, x1);
            dot(buffer, brush, y as i32, x);
        }
    } else {
        // Closer to horizontal: step along x.
        let (y1, x1, y2, x2) = if x1 > x2 {
            (y2, x2, y1, x1)
        } else {
            (y1, x1, y2, x2)
        };
        let (dist_x, dist_y) = (x2 - x1, y2 - y1);
        for x in visible(x1, x2, height, half) {
            let y = interpolate(dist_y, x - x1, dist_x, y1);
            dot(buffer, brush, y, x as i32);
        }
    }

    Ok(())
}

/// Outline with corners `(y1, x1)`, `(y1 + width, x1)`, `(y1, x1 + height)`
/// and `(y1 + width, x1 + height)`.
///
/// `width` moves along the first coordinate and `height` along the second.
/// Stops at the first failing edge; edges already drawn stay drawn.
pub fn rectangle(
    buffer: &mut PixelBuffer,
    brush: &Brush,
    y1: i32,
    x1: i32,
    width: i32,
    height: i32,
) -> Result<(), ValidationError> {
    let y2 = y1.saturating_add(width);
    let x2 = x1.saturating_add(height);
    line(buffer, brush, y1, x1, y2, x1)?;
    line(buffer, brush, y1, x1, y1, x2)?;
    line(buffer, brush, y1, x2, y2, x2)?;
    line(buffer, brush, y2, x1, y2, x2)
}

/// Outline through three vertices; the interior is left alone.
#[allow(clippy::too_many_arguments)]
pub fn triangle(
    buffer: &mut PixelBuffer,
    brush: &Brush,
    y1: i32,
    x1: i32,
    y2: i32,
    x2: i32,
    y3: i32,
    x3: i32,
) -> Result<(), ValidationError> {
    line(buffer, brush, y1, x1, y3, x3)?;
    line(buffer, brush, y2, x2, y3, x3)?;
    line(buffer, brush, y1, x1, y2, x2)
}

/// `(delta_dep * step + delta_indep * dep1) / delta_indep`, truncated toward zero.
fn interpolate(delta_dep: i64, step: i64, delta_indep: i64, dep1: i64) -> i32 {
    let numerator =
        i128::from(delta_dep) * i128::from(step) + i128::from(delta_indep) * i128::from(dep1);
    let value = numerator / i128::from(delta_indep);
    value.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

/// Part of `lo..=hi` whose dots can touch `0..limit`; stamps further out draw nothing.
fn visible(lo: i64, hi: i64, limit: i64, half: i64) -> RangeInclusive<i64> {
    lo.max(-half)..=hi.min(limit - 1 + half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Color, RED, WHITE};

    fn canvas(width: i32, height: i32) -> PixelBuffer {
        PixelBuffer::filled(width, height, WHITE).unwrap()
    }

    fn brush(size: i64) -> Brush {
        Brush::new(RED, size).unwrap()
    }

    /// Painted `(y, x)` points in row-major scan order.
    fn painted(buffer: &PixelBuffer, color: Color) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for x in 0..buffer.height() {
            for y in 0..buffer.width() {
                if buffer.pixel(y, x) == Some(color) {
                    points.push((y, x));
                }
            }
        }
        points
    }

    fn sorted(mut points: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
        points.sort_by_key(|&(y, x)| (x, y));
        points
    }

    #[test]
    fn dot_with_size_one_paints_one_pixel() {
        let mut buffer = canvas(5, 5);
        dot(&mut buffer, &brush(1), 2, 3);
        assert_eq!(painted(&buffer, RED), vec![(2, 3)]);
    }

    #[test]
    fn dot_with_size_three_paints_block_and_clips_at_corner() {
        let mut buffer = canvas(5, 5);
        dot(&mut buffer, &brush(3), 2, 2);
        assert_eq!(buffer.count_color(RED), 9);

        let mut buffer = canvas(5, 5);
        dot(&mut buffer, &brush(3), 0, 0);
        assert_eq!(painted(&buffer, RED), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn dot_uses_width_for_first_coordinate() {
        let mut buffer = canvas(6, 2);
        dot(&mut buffer, &brush(1), 5, 1);
        assert_eq!(painted(&buffer, RED), vec![(5, 1)]);

        let mut buffer = canvas(6, 2);
        dot(&mut buffer, &brush(1), 1, 5);
        assert_eq!(buffer.count_color(RED), 0);
    }

    #[test]
    fn dot_far_outside_draws_nothing() {
        let mut buffer = canvas(4, 4);
        dot(&mut buffer, &brush(5), -100, i32::MAX);
        assert_eq!(buffer.count_color(RED), 0);
    }

    #[test]
    fn line_with_equal_endpoints_matches_dot() {
        let mut via_line = canvas(7, 7);
        line(&mut via_line, &brush(3), 3, 4, 3, 4).unwrap();
        let mut via_dot = canvas(7, 7);
        dot(&mut via_dot, &brush(3), 3, 4);
        assert_eq!(via_line, via_dot);
    }

    #[test]
    fn line_rejects_even_brush() {
        let mut buffer = canvas(4, 4);
        let even = Brush {
            color: RED,
            size: 2,
        };
        assert_eq!(
            line(&mut buffer, &even, 0, 0, 3, 3),
            Err(ValidationError::EvenBrushSize(2))
        );
        assert_eq!(buffer.count_color(RED), 0);
    }

    #[test]
    fn axis_aligned_lines_in_either_direction() {
        let mut buffer = canvas(5, 5);
        line(&mut buffer, &brush(1), 4, 2, 1, 2).unwrap();
        assert_eq!(painted(&buffer, RED), vec![(1, 2), (2, 2), (3, 2), (4, 2)]);

        let mut buffer = canvas(5, 5);
        line(&mut buffer, &brush(1), 0, 3, 0, 1).unwrap();
        assert_eq!(painted(&buffer, RED), vec![(0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn steep_line_steps_along_first_coordinate() {
        let mut buffer = canvas(5, 5);
        line(&mut buffer, &brush(1), 0, 0, 4, 2).unwrap();
        assert_eq!(
            painted(&buffer, RED),
            sorted(vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)])
        );
    }

    #[test]
    fn reversed_steep_line_is_normalised() {
        let mut buffer = canvas(5, 5);
        line(&mut buffer, &brush(1), 4, 0, 0, 3).unwrap();
        assert_eq!(
            painted(&buffer, RED),
            sorted(vec![(0, 3), (1, 2), (2, 1), (3, 0), (4, 0)])
        );
    }

    #[test]
    fn shallow_line_steps_along_second_coordinate() {
        let mut buffer = canvas(5, 5);
        line(&mut buffer, &brush(1), 2, 0, 0, 4).unwrap();
        assert_eq!(
            painted(&buffer, RED),
            sorted(vec![(2, 0), (1, 1), (1, 2), (0, 3), (0, 4)])
        );
    }

    #[test]
    fn interpolation_truncates_toward_zero() {
        // x = (2y - 4) / 4 gives 0 at y = 1 where flooring would give -1.
        let mut buffer = canvas(5, 5);
        line(&mut buffer, &brush(1), 0, -1, 4, 1).unwrap();
        assert_eq!(
            painted(&buffer, RED),
            sorted(vec![(1, 0), (2, 0), (3, 0), (4, 1)])
        );
    }

    #[test]
    fn huge_coordinates_are_clipped_not_iterated() {
        let mut buffer = canvas(4, 4);
        line(&mut buffer, &brush(1), i32::MIN, 1, i32::MAX, 1).unwrap();
        assert_eq!(painted(&buffer, RED), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn rectangle_draws_outline_only() {
        let mut buffer = canvas(6, 6);
        rectangle(&mut buffer, &brush(1), 1, 1, 3, 2).unwrap();

        let mut expected = Vec::new();
        for x in 1..=3 {
            for y in 1..=4 {
                if x == 1 || x == 3 || y == 1 || y == 4 {
                    expected.push((y, x));
                }
            }
        }
        assert_eq!(painted(&buffer, RED), sorted(expected));
        assert_eq!(buffer.pixel(2, 2), Some(WHITE));
    }

    #[test]
    fn triangle_draws_edges_through_vertices() {
        let mut buffer = canvas(6, 6);
        triangle(&mut buffer, &brush(1), 0, 0, 4, 0, 0, 4).unwrap();
        for vertex in [(0, 0), (4, 0), (0, 4)] {
            assert_eq!(buffer.pixel(vertex.0, vertex.1), Some(RED));
        }
        // hypotenuse from (4, 0) to (0, 4)
        for (y, x) in [(3, 1), (2, 2), (1, 3)] {
            assert_eq!(buffer.pixel(y, x), Some(RED));
        }
        assert_eq!(buffer.pixel(1, 1), Some(WHITE));
        assert_eq!(buffer.count_color(BLACK), 0);
    }

    #[test]
    fn shapes_fail_fast_on_even_brush() {
        let mut buffer = canvas(4, 4);
        let even = Brush {
            color: RED,
            size: 4,
        };
        assert!(rectangle(&mut buffer, &even, 0, 0, 2, 2).is_err());
        assert!(triangle(&mut buffer, &even, 0, 0, 1, 1, 2, 0).is_err());
        assert_eq!(buffer.count_color(RED), 0);
    }
}
