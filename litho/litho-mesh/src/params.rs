//! Plate layout parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// How the flat back of the plate is tessellated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BackStyle {
    /// One quad per front quad, mirroring the relief grid at z=0.
    #[default]
    Grid,

    /// A single apex at the footprint center with one triangle per
    /// boundary edge segment. The back is flat, so it needs no interior
    /// subdivision; this drops the back-face count from `O(W·H)` to
    /// `O(W+H)`.
    Fan,
}

/// Dimensions of the mitred border frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BorderParams {
    /// Height of the frame plane in mm.
    pub thickness_mm: f64,

    /// How far the frame extends outward from the plate in mm.
    pub width_mm: f64,
}

impl Default for BorderParams {
    fn default() -> Self {
        Self {
            thickness_mm: 5.0,
            width_mm: 4.0,
        }
    }
}

/// Parameters for plate tessellation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlateParams {
    /// Physical distance between adjacent samples in mm.
    pub step_mm: f64,

    /// Back surface tessellation style.
    pub back_style: BackStyle,

    /// Border frame dimensions; `None` emits plain side walls.
    pub border: Option<BorderParams>,
}

impl PlateParams {
    /// Create parameters with the given step and no border.
    #[must_use]
    pub fn with_step(step_mm: f64) -> Self {
        Self {
            step_mm,
            ..Self::default()
        }
    }

    /// Select the back tessellation style.
    #[must_use]
    pub const fn back_style(mut self, style: BackStyle) -> Self {
        self.back_style = style;
        self
    }

    /// Enable the border frame.
    #[must_use]
    pub const fn bordered(mut self, border: BorderParams) -> Self {
        self.border = Some(border);
        self
    }

    /// Check that the step and border dimensions are positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidStep`] or [`MeshError::InvalidBorder`].
    pub fn validate(&self) -> MeshResult<()> {
        if !self.step_mm.is_finite() || self.step_mm <= 0.0 {
            return Err(MeshError::InvalidStep {
                step_mm: self.step_mm,
            });
        }
        if let Some(border) = self.border {
            if !border.thickness_mm.is_finite()
                || border.thickness_mm <= 0.0
                || !border.width_mm.is_finite()
                || border.width_mm <= 0.0
            {
                return Err(MeshError::InvalidBorder {
                    thickness_mm: border.thickness_mm,
                    width_mm: border.width_mm,
                });
            }
        }
        Ok(())
    }
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            step_mm: 0.2,
            back_style: BackStyle::Grid,
            border: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlateParams::default().validate().is_ok());
        assert!(PlateParams::default()
            .bordered(BorderParams::default())
            .validate()
            .is_ok());
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(matches!(
            PlateParams::with_step(0.0).validate(),
            Err(MeshError::InvalidStep { .. })
        ));
    }

    #[test]
    fn non_finite_step_is_rejected() {
        assert!(PlateParams::with_step(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn negative_border_width_is_rejected() {
        let params = PlateParams::default().bordered(BorderParams {
            thickness_mm: 5.0,
            width_mm: -1.0,
        });
        assert!(matches!(
            params.validate(),
            Err(MeshError::InvalidBorder { .. })
        ));
    }
}
