//! Error types for plate tessellation.

use thiserror::Error;

/// Result type for plate tessellation.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while setting up plate tessellation.
///
/// Emission itself performs no I/O and cannot fail; only the layout
/// parameters are validated, up front.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The sample step is not a positive finite distance.
    #[error("invalid step size: {step_mm} mm")]
    InvalidStep {
        /// Requested step in millimeters.
        step_mm: f64,
    },

    /// The border dimensions are not positive finite distances.
    #[error("invalid border: thickness {thickness_mm} mm, width {width_mm} mm")]
    InvalidBorder {
        /// Requested border plate thickness in millimeters.
        thickness_mm: f64,
        /// Requested border rim width in millimeters.
        width_mm: f64,
    },
}
