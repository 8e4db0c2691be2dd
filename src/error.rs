//! Error types for asset conversion.
//!
//! Every failure is terminal for a conversion: validation happens before the
//! output file is opened, so an error never leaves a partial file behind.

use std::{ffi::OsString, path::PathBuf};
use thiserror::Error;

/// Main error type for the packer, the header emitter and the sources
/// feeding them.
#[derive(Error, Debug)]
pub enum Error {
    /// The module/pixel grid has no rows.
    #[error("Expected square matrix NxN, got an empty grid")]
    EmptyGrid,

    /// A row of the grid does not have as many cells as the grid has rows.
    #[error("Expected square matrix NxN: row {row} has {len} cells, grid has {rows} rows")]
    NotSquare { row: usize, len: usize, rows: usize },

    /// Packed buffer length is inconsistent with the declared module count.
    ///
    /// Raised by the emitter when the buffer was produced by a different
    /// packing scheme than the one it recomputes.
    #[error("Expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A fixed-size input image has the wrong dimensions.
    #[error("Expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Wrong number of command line arguments. Holds the usage line.
    #[error("{0}")]
    Usage(String),

    /// A text argument (such as the QR content) is not valid UTF-8.
    #[error("Argument is not valid UTF-8: {}", .0.to_string_lossy())]
    NonUnicodeArgument(OsString),

    #[error("Input not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The archive does not contain the entry the extractor reads.
    #[error("Archive entry {0} is missing")]
    MissingEntry(String),

    #[error("QR encoding failed: {0}")]
    Qr(qrcode::types::QrError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
}

impl Error {
    /// Check whether this error is a bad invocation rather than a failed
    /// conversion.
    ///
    /// The binaries use this to pick between printing the usage line and
    /// printing a diagnostic.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
