//! The in-memory raster being edited.

use super::header::{BYTES_PER_PIXEL, InfoHeader};
use crate::draw::Color;
use crate::error::ValidationError;

/// Decoded 24-bit raster.
///
/// Pixels are kept blue-green-red, one row after another in the order they
/// appear in the file. Coordinates follow the editor's `(y, x)` convention:
/// `y` picks the column and is bounded by [`width`](Self::width), `x` picks
/// the row and is bounded by [`height`](Self::height), so pixel `(y, x)`
/// starts at byte `(y + x * width) * 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    info: InfoHeader,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a black image.
    pub fn new(width: i32, height: i32) -> Result<Self, ValidationError> {
        Self::allocate(InfoHeader::new(width, height))
    }

    /// Creates an image where every pixel has `color`.
    pub fn filled(width: i32, height: i32, color: Color) -> Result<Self, ValidationError> {
        let mut buffer = Self::new(width, height)?;
        let bgr = color.to_bgr();
        for pixel in buffer.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&bgr);
        }
        Ok(buffer)
    }

    /// Allocates zeroed pixel storage for the dimensions in `info`.
    ///
    /// Fails without allocating anything when the dimensions are not
    /// positive or the pixel data cannot be reserved.
    pub(crate) fn allocate(info: InfoHeader) -> Result<Self, ValidationError> {
        let len = Self::pixel_len(&info)?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| ValidationError::AllocationFailed(len))?;
        pixels.resize(len, 0);

        Ok(Self { info, pixels })
    }

    /// Wraps pixel data that was read for `info`; `pixels` must hold exactly
    /// [`pixel_len`](Self::pixel_len) bytes.
    pub(crate) fn from_pixels(info: InfoHeader, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(Self::pixel_len(&info).ok(), Some(pixels.len()));
        Self { info, pixels }
    }

    /// Number of pixel bytes an image with the dimensions in `info` holds.
    pub(crate) fn pixel_len(info: &InfoHeader) -> Result<usize, ValidationError> {
        let invalid = ValidationError::InvalidDimensions {
            width: info.width,
            height: info.height,
        };
        if info.width <= 0 || info.height <= 0 {
            return Err(invalid);
        }
        (info.width as usize)
            .checked_mul(info.height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(invalid)
    }

    pub fn width(&self) -> i32 {
        self.info.width
    }

    pub fn height(&self) -> i32 {
        self.info.height
    }

    /// Info header carried over from the decoded file.
    pub fn info(&self) -> &InfoHeader {
        &self.info
    }

    /// Raw pixel bytes, blue first.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Bytes of one row without padding.
    pub fn row_len(&self) -> usize {
        self.info.width as usize * BYTES_PER_PIXEL
    }

    /// Whether `(y, x)` lies inside the image.
    pub fn contains(&self, y: i32, x: i32) -> bool {
        y >= 0 && y < self.info.width && x >= 0 && x < self.info.height
    }

    /// Byte offset of pixel `(y, x)`, or `None` outside the image.
    pub fn offset(&self, y: i32, x: i32) -> Option<usize> {
        if !self.contains(y, x) {
            return None;
        }
        Some((y as usize + x as usize * self.info.width as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, y: i32, x: i32) -> Option<Color> {
        let offset = self.offset(y, x)?;
        let p = &self.pixels[offset..offset + BYTES_PER_PIXEL];
        Some(Color::from_bgr([p[0], p[1], p[2]]))
    }

    /// Sets pixel `(y, x)`; returns `false` and does nothing outside the image.
    pub fn set_pixel(&mut self, y: i32, x: i32, color: Color) -> bool {
        match self.offset(y, x) {
            Some(offset) => {
                self.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgr());
                true
            }
            None => false,
        }
    }

    /// Number of pixels that currently have `color`.
    pub fn count_color(&self, color: Color) -> usize {
        let bgr = color.to_bgr();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|pixel| *pixel == bgr)
            .count()
    }
}
