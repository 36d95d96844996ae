//! The streaming contract between mesh generation and serialization.

use std::convert::Infallible;

use crate::Triangle;

/// Receiver of a triangle stream.
///
/// The plate builder emits every surface triangle exactly once, in
/// unspecified order, into a sink. A mesh of `width × height` samples can
/// run to hundreds of thousands of triangles, so sinks are expected to
/// consume each triangle as it arrives rather than require the whole
/// stream up front; the STL writer serializes each one straight to its
/// destination.
///
/// Implementations that cannot fail use [`Infallible`] as their error
/// type.
pub trait TriangleSink {
    /// Error produced when the sink cannot accept a triangle.
    type Error;

    /// Accept one triangle of the stream.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the triangle cannot be consumed, e.g.
    /// an I/O failure on a file-backed sink.
    fn emit(&mut self, triangle: &Triangle) -> Result<(), Self::Error>;
}

/// A sink that retains the full triangle stream in memory.
///
/// Useful for inspection and topology checks; the conversion pipeline
/// itself streams straight to the STL writer instead.
///
/// # Example
///
/// ```
/// use litho_types::{Point3, Triangle, TriangleBuffer, TriangleSink};
///
/// let mut buffer = TriangleBuffer::new();
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// buffer.emit(&tri).unwrap();
/// assert_eq!(buffer.triangles[0], tri);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriangleBuffer {
    /// The collected triangles, in emission order.
    pub triangles: Vec<Triangle>,
}

impl TriangleBuffer {
    /// Create a new empty buffer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Create a buffer with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Number of collected triangles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Check whether the buffer is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl TriangleSink for TriangleBuffer {
    type Error = Infallible;

    #[inline]
    fn emit(&mut self, triangle: &Triangle) -> Result<(), Self::Error> {
        self.triangles.push(*triangle);
        Ok(())
    }
}
