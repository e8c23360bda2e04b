//! Error types for raster conversion.
//!
//! Conversion itself cannot fail on well-formed input, so every variant here
//! describes a precondition the caller violated.

use thiserror::Error;

/// Main error type for raster conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero.
    ///
    /// The header arithmetic and the packing loops assume a non-empty image,
    /// so degenerate rasters are rejected instead of producing an empty
    /// payload.
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Row byte-width or row count does not fit the 16-bit header fields.
    #[error("Image too large for raster header: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} pixels, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("Crop {width}x{height} at ({x}, {y}) exceeds source image")]
    CropOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid configuration parameter provided.
    #[error("Invalid configuration parameter: {0}")]
    InvalidConfig(String),
}
