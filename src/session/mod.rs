//! Editing session state.
//!
//! A [`Session`] owns the currently loaded image and the brush. Every command
//! of the protocol runs against it, and it is the only place images are read
//! from or written to disk.

mod options;
mod storage;

pub use options::{SaveOptions, options_from_config};
pub use storage::{backup_path, read_image, write_image};

use crate::config::Config;
use crate::draw::{Brush, Color, FillOutcome, compose, fill, raster};
use crate::error::{EditorError, Result, ValidationError};
use crate::image::PixelBuffer;
use crate::util::color_to_name;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// The image being edited together with the current brush.
#[derive(Debug, Default)]
pub struct Session {
    image: Option<PixelBuffer>,
    pub brush: Brush,
    pub save_options: SaveOptions,
}

impl Session {
    /// Creates a session with no image and the default black single-pixel brush.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session whose brush and save behaviour come from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            image: None,
            brush: config.initial_brush(),
            save_options: options_from_config(&config.save),
        }
    }

    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Swaps in `image`, returning the one it replaces.
    pub fn replace_image(&mut self, image: PixelBuffer) -> Option<PixelBuffer> {
        self.image.replace(image)
    }

    /// Loads the bitmap at `path`. On failure the current image is kept.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let image = read_image(path)?;
        self.image = Some(image);
        Ok(())
    }

    /// Writes the current image to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let image = self.image.as_ref().ok_or(ValidationError::NoImage)?;
        write_image(path, image, &self.save_options)
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.brush.color = Color::new(r, g, b);
        debug!(
            "Brush color set to {} ({})",
            self.brush.color,
            color_to_name(&self.brush.color)
        );
    }

    /// Changes the stroke size. Sizes that are even or outside `1..=255` are
    /// rejected and the brush keeps its previous size.
    pub fn set_line_width(&mut self, size: i64) -> Result<()> {
        self.brush.set_size(size)?;
        debug!("Brush size set to {}", self.brush.size);
        Ok(())
    }

    pub fn draw_line(&mut self, y1: i32, x1: i32, y2: i32, x2: i32) -> Result<()> {
        let brush = self.brush;
        raster::line(self.image_mut()?, &brush, y1, x1, y2, x2)?;
        Ok(())
    }

    pub fn draw_rectangle(&mut self, y1: i32, x1: i32, width: i32, height: i32) -> Result<()> {
        let brush = self.brush;
        raster::rectangle(self.image_mut()?, &brush, y1, x1, width, height)?;
        Ok(())
    }

    pub fn draw_triangle(
        &mut self,
        y1: i32,
        x1: i32,
        y2: i32,
        x2: i32,
        y3: i32,
        x3: i32,
    ) -> Result<()> {
        let brush = self.brush;
        raster::triangle(self.image_mut()?, &brush, y1, x1, y2, x2, y3, x3)?;
        Ok(())
    }

    /// Flood fills from `(y, x)` with the brush color.
    pub fn fill(&mut self, y: i32, x: i32) -> Result<FillOutcome> {
        let brush = self.brush;
        let outcome = fill::fill(self.image_mut()?, &brush, y, x);
        match outcome {
            FillOutcome::Unchanged => debug!("Fill at ({y}, {x}) changed nothing"),
            FillOutcome::Filled(count) => debug!("Fill at ({y}, {x}) recolored {count} pixels"),
        }
        Ok(outcome)
    }

    /// Pastes the bitmap stored at `path` with its first pixel on `(y, x)`.
    ///
    /// Returns the number of pixels copied. The current image is untouched
    /// if the file cannot be read or decoded.
    pub fn insert(&mut self, path: &Path, y: i32, x: i32) -> Result<usize> {
        let image = self.image_mut()?;
        let bytes = fs::read(path).map_err(|err| EditorError::with_path(err, path))?;
        let copied = compose::insert(image, &bytes, y, x)?;
        info!("Inserted {} at ({y}, {x}): {copied} pixels", path.display());
        Ok(copied)
    }

    fn image_mut(&mut self) -> Result<&mut PixelBuffer> {
        Ok(self.image.as_mut().ok_or(ValidationError::NoImage)?)
    }
}
