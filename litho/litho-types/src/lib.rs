//! Core geometry types for LithoForge.
//!
//! This crate provides the shared vocabulary of the lithophane pipeline:
//!
//! - [`Triangle`] - A triangle with concrete vertex positions
//! - [`TriangleSink`] - The streaming contract between mesh generation
//!   and serialization
//! - [`TriangleBuffer`] - A sink that retains the stream in memory
//!
//! # Units
//!
//! All coordinates are `f64` millimeters. Serialization narrows to `f32`
//! because STL stores 32-bit floats.
//!
//! # Coordinate System
//!
//! Right-handed:
//! - X: plate width
//! - Y: plate depth
//! - Z: relief thickness (up)
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**
//! the solid. Normals are never stored on triangles; the STL writer
//! serializes a zero normal for every facet.
//!
//! # Example
//!
//! ```
//! use litho_types::{Point3, Triangle, TriangleBuffer, TriangleSink};
//!
//! let mut buffer = TriangleBuffer::new();
//! buffer
//!     .emit(&Triangle::new(
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ))
//!     .unwrap();
//!
//! assert_eq!(buffer.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod sink;
mod triangle;

pub use sink::{TriangleBuffer, TriangleSink};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
