//! Error types for height-field construction.

use thiserror::Error;

/// Result type for height-field operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors that can occur while building a height field.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The sample grid is smaller than the 2×2 minimum a plate needs.
    #[error("sample grid too small: {width}x{height}, need at least 2x2")]
    GridTooSmall {
        /// Grid width in samples.
        width: usize,
        /// Grid height in samples.
        height: usize,
    },

    /// The thickness range is not a valid `0 < min < max` pair.
    #[error("invalid thickness range: min {min} mm, max {max} mm")]
    InvalidThickness {
        /// Requested minimum thickness in millimeters.
        min: f64,
        /// Requested maximum thickness in millimeters.
        max: f64,
    },

    /// A luminance sample is NaN or infinite.
    #[error("non-finite luminance sample at column {column}, row {row}")]
    NonFiniteSample {
        /// Sample column.
        column: usize,
        /// Sample row.
        row: usize,
    },
}
