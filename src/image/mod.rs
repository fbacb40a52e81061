//! Pixel buffer and 24-bit bitmap file codec.
//!
//! - [`PixelBuffer`]: the decoded raster plus its info header
//! - [`header`]: fixed 14 + 40 byte header layout and validation
//! - [`codec`]: decode/encode with row padding

pub mod buffer;
pub mod codec;
pub mod header;

pub use buffer::PixelBuffer;
pub use codec::{decode, encode, read_from, write_to};
