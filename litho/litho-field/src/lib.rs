//! Height-field construction for LithoForge.
//!
//! This crate turns a grid of luminance samples into a grid of plate
//! thicknesses:
//!
//! - [`ScalarGrid`] - A 2D grid of `f64` samples
//! - [`ReliefParams`] - Thickness range and negate flag
//! - [`HeightField`] - The normalized thickness grid consumed by the
//!   mesh builder
//!
//! # Mapping
//!
//! Samples are normalized against the grid's own extrema, then mapped so
//! that **darker pixels come out thicker**: a lithophane blocks more
//! light where the image is dark. The mapping also reverses the grid
//! along its width (see [`HeightField::from_luminance`]).
//!
//! # Example
//!
//! ```
//! use litho_field::{HeightField, ReliefParams, ScalarGrid};
//!
//! let grid = ScalarGrid::from_fn(2, 2, |i, j| if i == j { 0.0 } else { 1.0 });
//! let field = HeightField::from_luminance(&grid, &ReliefParams::default()).unwrap();
//!
//! // Dark cells map to the maximum thickness.
//! assert!((field.thickness(1, 0) - 3.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod field;
mod grid;
mod params;

pub use error::{FieldError, FieldResult};
pub use field::HeightField;
pub use grid::ScalarGrid;
pub use params::ReliefParams;
