//! Relief mapping parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};

/// Parameters for mapping luminance to plate thickness.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReliefParams {
    /// Thickness of the brightest cells in mm.
    pub min_thickness_mm: f64,

    /// Thickness of the darkest cells in mm.
    pub max_thickness_mm: f64,

    /// Invert the mapping so bright cells come out thick.
    pub negate: bool,
}

impl Default for ReliefParams {
    fn default() -> Self {
        Self {
            min_thickness_mm: 0.5,
            max_thickness_mm: 3.5,
            negate: false,
        }
    }
}

impl ReliefParams {
    /// Set the thickness range.
    #[must_use]
    pub const fn with_thickness(mut self, min_mm: f64, max_mm: f64) -> Self {
        self.min_thickness_mm = min_mm;
        self.max_thickness_mm = max_mm;
        self
    }

    /// Set the negate flag.
    #[must_use]
    pub const fn negated(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Check that the thickness range is a finite `0 < min < max` pair.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidThickness`] otherwise.
    pub fn validate(&self) -> FieldResult<()> {
        let (min, max) = (self.min_thickness_mm, self.max_thickness_mm);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min >= max {
            return Err(FieldError::InvalidThickness { min, max });
        }
        Ok(())
    }
}
