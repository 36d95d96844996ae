//! Image decoding and luminance sampling for LithoForge.
//!
//! This crate is the pipeline's collaborator boundary with the raster
//! world: it decodes an image file, smooths it, resamples it to the
//! physical step grid, and produces the luminance
//! [`ScalarGrid`](litho_field::ScalarGrid) the height field is built
//! from.
//!
//! # Pipeline
//!
//! 1. Decode (`image::open`)
//! 2. Gaussian blur at full resolution
//! 3. Resample to the derived pixel grid (triangle filter)
//! 4. Luminance per pixel: `(0.3·R + 0.59·G + 0.11·B) / 256`
//! 5. Mirror flags apply while the grid is written
//!
//! The derived grid size uses truncating integer math on purpose:
//!
//! ```text
//! pixel_width  = desired_width_mm / step_mm        (truncated)
//! pixel_height = image_height * pixel_width / image_width
//! ```
//!
//! so aspect ratio is only approximately preserved. The truncation is
//! load-bearing: dimension-compatible output requires this exact
//! formula, not a rounded variant.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod sample;

pub use error::{SampleError, SampleResult};
pub use sample::{load_luminance, luminance_grid, target_dimensions, SampleOptions};
