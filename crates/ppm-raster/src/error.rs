//! Error type for raster parsing, transforming and saving.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported format {found:?} (expected P3)")]
    UnsupportedFormat { found: String },

    #[error("Missing {field}")]
    MissingField { field: &'static str },

    #[error("Invalid {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Truncated sample data: expected {expected} values, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("Cannot allocate a {width}x{height} raster")]
    OutOfMemory { width: usize, height: usize },

    #[error("Raster too small for 2x2 dithering: {width}x{height}")]
    InvalidGeometry { width: usize, height: usize },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
