//! Error types shared by the codec, drawing operations, session and command protocol.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Top-level error returned by editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("invalid bitmap: {0}")]
    Format(#[from] FormatError),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// The byte stream is not a bitmap this editor understands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("bad signature {0:?}, expected \"BM\"")]
    BadSignature([u8; 2]),

    #[error("unsupported bit depth {0}, only 24-bit images are supported")]
    UnsupportedBitDepth(u16),

    #[error("unsupported compression type {0}")]
    Compressed(u32),

    #[error("header truncated after {0} of 54 bytes")]
    TruncatedHeader(usize),
}

/// A request was well-formed but cannot be carried out in the current state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no image loaded")]
    NoImage,

    #[error("brush size {0} must be odd")]
    EvenBrushSize(u8),

    #[error("brush size {0} out of range 1..=255")]
    BrushSizeOutOfRange(i64),

    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("cannot allocate {0} bytes of pixel data")]
    AllocationFailed(usize),
}

/// Malformed input on the command stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown instruction '{0}'")]
    UnknownVerb(String),

    #[error("unknown {verb} mode '{mode}'")]
    UnknownMode { verb: &'static str, mode: String },

    #[error("expected {expected}, found '{found}'")]
    BadArgument {
        expected: &'static str,
        found: String,
    },

    #[error("input ended while reading {0}")]
    UnexpectedEnd(&'static str),

    #[error("input ended without 'quit'")]
    MissingQuit,
}

impl EditorError {
    /// Wraps an I/O failure with the path it concerns.
    pub fn with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        EditorError::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {}", path.display(), err),
        ))
    }
}
