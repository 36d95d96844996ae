//! Streaming STL serialization for LithoForge.
//!
//! One writer session per output file:
//!
//! ```text
//! create → emit triangle* → finalize
//! ```
//!
//! - [`StlFormat`] - Binary or ASCII, chosen at construction
//! - [`StlWriter`] - The session object, a closed pair of sink variants
//!   ([`BinaryStlSink`], [`AsciiStlSink`]); implements
//!   [`TriangleSink`](litho_types::TriangleSink) so the plate builder
//!   streams straight into it
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header, written as ASCII spaces
//! UINT32       – Number of triangles (patched on finalize)
//! foreach triangle
//!     REAL32[3] – Normal vector (always zero here)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (always zero)
//! end
//! ```
//!
//! The triangle count is unknown until the stream ends, so the writer
//! puts a zero placeholder after the header and seeks back to offset 80
//! on finalize. A partial file abandoned mid-stream therefore carries a
//! zero count, never a wrong non-zero one.
//!
//! # ASCII Format
//!
//! `solid <name>`, one facet block per triangle, `endsolid <name>`.
//! Coordinates are narrowed to `f32` first and printed with Rust's
//! shortest round-trip formatting, so the ASCII file decodes to exactly
//! the `f32` values the binary file stores.
//!
//! Normals are serialized as `0 0 0` in both formats, the STL
//! convention for "not computed"; slicers derive facet orientation from
//! the vertex winding.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use litho_stl::{StlFormat, StlWriter};
//! use litho_types::{Triangle, TriangleSink};
//!
//! let mut writer = StlWriter::new(Cursor::new(Vec::new()), StlFormat::Binary).unwrap();
//! writer
//!     .emit(&Triangle::from_arrays([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]))
//!     .unwrap();
//! writer.finalize().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod writer;

pub use error::{StlError, StlResult};
pub use writer::{AsciiStlSink, BinaryStlSink, StlFormat, StlWriter, DEFAULT_SOLID_NAME};
