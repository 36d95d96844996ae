//! Error types for STL serialization.

use thiserror::Error;

/// Result type for STL serialization.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur while writing an STL file.
#[derive(Debug, Error)]
pub enum StlError {
    /// I/O failure on the destination, including the finalize seek that
    /// patches the binary triangle count.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The binary format stores the triangle count in 32 bits.
    #[error("triangle count exceeds the binary STL limit of {} triangles", u32::MAX)]
    TooManyTriangles,
}
