//! Error types for image sampling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for image sampling.
pub type SampleResult<T> = Result<T, SampleError>;

/// Errors that can occur while sampling an input image.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The image could not be decoded.
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The physical width or step is not a positive finite distance.
    #[error("invalid sampling: width {width_mm} mm at step {step_mm} mm")]
    InvalidSampling {
        /// Requested plate width in millimeters.
        width_mm: f64,
        /// Requested sample step in millimeters.
        step_mm: f64,
    },

    /// The derived pixel grid is smaller than the 2×2 minimum.
    #[error("derived pixel grid too small: {width}x{height}")]
    GridTooSmall {
        /// Derived grid width in samples.
        width: u32,
        /// Derived grid height in samples.
        height: u32,
    },
}
