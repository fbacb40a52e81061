//! Pasting one bitmap into another.

use crate::error::Result;
use crate::image::{PixelBuffer, codec, header::BYTES_PER_PIXEL};
use log::debug;
use std::ops::Range;

/// Decodes a complete bitmap from `source_bytes` and pastes it at `(y, x)`.
///
/// The target is only touched once the source decoded successfully.
/// Returns the number of pixels copied.
pub fn insert(target: &mut PixelBuffer, source_bytes: &[u8], y: i32, x: i32) -> Result<usize> {
    let source = codec::decode(source_bytes)?;
    Ok(composite(target, &source, y, x))
}

/// Copies `source` into `target` so that its first pixel lands on `(y, x)`.
///
/// Each copied row is `min(source_width, target_width - y)` pixels long and
/// `min(source_height, target_height - x)` rows are copied, starting at target
/// byte `(y + x * target_width) * 3` and source byte 0. Parts that would fall
/// outside the target, including on the negative side, are dropped.
pub fn composite(target: &mut PixelBuffer, source: &PixelBuffer, y: i32, x: i32) -> usize {
    let (y, x) = (i64::from(y), i64::from(x));
    let target_width = i64::from(target.width());
    let source_width = i64::from(source.width());

    let cols = clip(y, source_width, target_width);
    let rows = clip(x, i64::from(source.height()), i64::from(target.height()));
    if cols.is_empty() || rows.is_empty() {
        debug!("Inserted image at ({y}, {x}) lies outside the target");
        return 0;
    }

    let run = (cols.end - cols.start) as usize * BYTES_PER_PIXEL;
    for row in rows.clone() {
        let src = ((row * source_width + cols.start) * BYTES_PER_PIXEL as i64) as usize;
        let dst = (((row + x) * target_width + cols.start + y) * BYTES_PER_PIXEL as i64) as usize;
        target.pixels_mut()[dst..dst + run].copy_from_slice(&source.pixels()[src..src + run]);
    }

    ((cols.end - cols.start) * (rows.end - rows.start)) as usize
}

/// Source indices along one axis that land inside `0..target_len` when shifted by `offset`.
fn clip(offset: i64, source_len: i64, target_len: i64) -> Range<i64> {
    let start = (-offset).max(0);
    let end = source_len.min(target_len - offset);
    start..end.max(start)
}
