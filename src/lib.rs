//! Library exports for the bmpedit bitmap editor.
//!
//! The binary is a thin shell around these modules: [`image`] reads and writes
//! 24-bit bitmaps, [`draw`] edits pixels, [`session`] holds the image being
//! edited and [`command`] drives a session from the text protocol.

pub mod command;
pub mod config;
pub mod draw;
pub mod error;
pub mod image;
pub mod session;
pub mod util;

pub use command::Command;
pub use config::Config;
pub use error::{EditorError, Result};
pub use image::PixelBuffer;
pub use session::Session;
