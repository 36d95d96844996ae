//! Watertight lithophane plate tessellation.
//!
//! This crate turns a [`HeightField`](litho_field::HeightField) into a
//! closed triangle mesh, streamed into any
//! [`TriangleSink`](litho_types::TriangleSink):
//!
//! - [`PlateParams`] - Step size, back tessellation style, optional
//!   border frame
//! - [`PlateBuilder`] - Emits front relief, back, and side walls or a
//!   mitred border frame, every surface exactly once
//! - [`SoupTopology`] - Edge adjacency over an unindexed triangle
//!   stream, for watertightness checks
//!
//! # Topology guarantee
//!
//! The emitted stream forms a closed 2-manifold: every edge is shared by
//! exactly two triangles with opposite traversal direction, so the mesh
//! has no boundary edges and consistent outward winding, the properties
//! slicers need for solid printing.
//!
//! # Example
//!
//! ```
//! use litho_field::{HeightField, ReliefParams, ScalarGrid};
//! use litho_mesh::{PlateBuilder, PlateParams, SoupTopology};
//! use litho_types::TriangleBuffer;
//!
//! let grid = ScalarGrid::from_fn(3, 3, |i, j| (i + j) as f64 / 4.0);
//! let field = HeightField::from_luminance(&grid, &ReliefParams::default()).unwrap();
//!
//! let mut buffer = TriangleBuffer::new();
//! let count = PlateBuilder::new(&field, &PlateParams::default())
//!     .unwrap()
//!     .emit(&mut buffer)
//!     .unwrap();
//!
//! assert_eq!(count as usize, buffer.len());
//! assert!(SoupTopology::build(&buffer.triangles).is_watertight());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod adjacency;
mod border;
mod error;
mod params;
mod plate;

pub use adjacency::SoupTopology;
pub use error::{MeshError, MeshResult};
pub use params::{BackStyle, BorderParams, PlateParams};
pub use plate::PlateBuilder;
