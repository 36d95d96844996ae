//! Height field: the normalized thickness grid.

use tracing::{debug, warn};

use crate::error::{FieldError, FieldResult};
use crate::grid::ScalarGrid;
use crate::params::ReliefParams;

/// A grid of plate thickness values in millimeters.
///
/// Built once per conversion from a luminance grid and immutable
/// afterwards. Every cell is guaranteed to lie within the configured
/// `[min_thickness, max_thickness]` range, and the grid is at least 2×2
/// so a plate can be tessellated from it.
#[derive(Debug, Clone)]
pub struct HeightField {
    grid: ScalarGrid,
    min_thickness_mm: f64,
    max_thickness_mm: f64,
}

impl HeightField {
    /// Build a height field from luminance samples.
    ///
    /// Samples are normalized against the grid's own extrema, negated if
    /// requested, and mapped so darker cells come out thicker:
    ///
    /// ```text
    /// t = (g[i][j] - min_gray) / (max_gray - min_gray)
    /// height[W-1-i][j] = max_thickness - t * (max_thickness - min_thickness)
    /// ```
    ///
    /// The `W-1-i` index reverses the grid along its width. This is
    /// intrinsic to the mapping and composes with any mirror flag applied
    /// when the luminance grid was sampled; under `mirror_x` the two
    /// reversals cancel. Deliberate: downstream orientation depends on
    /// both being present.
    ///
    /// A grid with no luminance variation would divide by zero here;
    /// instead every cell maps to the mid-thickness
    /// `(min_thickness + max_thickness) / 2`, so a solid-color image
    /// still yields a printable plate.
    ///
    /// # Errors
    ///
    /// - [`FieldError::GridTooSmall`] if the grid is under 2×2
    /// - [`FieldError::InvalidThickness`] if the range is not `0 < min < max`
    /// - [`FieldError::NonFiniteSample`] if any sample is NaN or infinite
    pub fn from_luminance(samples: &ScalarGrid, params: &ReliefParams) -> FieldResult<Self> {
        params.validate()?;

        let (width, height) = (samples.width(), samples.height());
        if width < 2 || height < 2 {
            return Err(FieldError::GridTooSmall { width, height });
        }

        for (column, row, value) in samples.samples() {
            if !value.is_finite() {
                return Err(FieldError::NonFiniteSample { column, row });
            }
        }

        let (min_thick, max_thick) = (params.min_thickness_mm, params.max_thickness_mm);

        // min_max is Some: the grid has at least 4 samples.
        let (min_gray, max_gray) = samples.min_max().unwrap_or((0.0, 0.0));
        let span = max_gray - min_gray;
        debug!(width, height, min_gray, max_gray, "normalizing luminance grid");

        let mut grid = ScalarGrid::new(width, height);
        if span > 0.0 {
            for (i, j, g) in samples.samples() {
                let mut t = (g - min_gray) / span;
                if params.negate {
                    t = 1.0 - t;
                }
                grid.set(width - 1 - i, j, max_thick - t * (max_thick - min_thick));
            }
        } else {
            let mid = (min_thick + max_thick) / 2.0;
            warn!(
                luminance = min_gray,
                thickness_mm = mid,
                "flat image, emitting constant mid-thickness plate"
            );
            for j in 0..height {
                for i in 0..width {
                    grid.set(i, j, mid);
                }
            }
        }

        Ok(Self {
            grid,
            min_thickness_mm: min_thick,
            max_thickness_mm: max_thick,
        })
    }

    /// Field width in samples.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Field height in samples.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Thickness at `(column, row)` in millimeters.
    #[inline]
    #[must_use]
    pub fn thickness(&self, column: usize, row: usize) -> f64 {
        self.grid.get(column, row)
    }

    /// Configured minimum thickness in millimeters.
    #[inline]
    #[must_use]
    pub const fn min_thickness_mm(&self) -> f64 {
        self.min_thickness_mm
    }

    /// Configured maximum thickness in millimeters.
    #[inline]
    #[must_use]
    pub const fn max_thickness_mm(&self) -> f64 {
        self.max_thickness_mm
    }
}
