//! Error types for twin geometry calculations.

use thiserror::Error;

/// Errors raised by the orientation-relationship, rotation and angle calculations.
///
/// Every variant names the step that failed, so callers never have to interpret
/// a NaN or an infinity coming out of the linear algebra.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TwinningError {
    /// A required inverse (rPm, metric tensor, shear matrix) does not exist.
    #[error("{name} is singular (determinant {determinant:e})")]
    SingularMatrix {
        /// Which matrix failed to invert.
        name: &'static str,
        /// Its determinant.
        determinant: f64,
    },

    /// The shear radicand trace(CᵗGC·G⁻¹) − 3 is negative.
    #[error("non-physical input: shear radicand {radicand:e} is negative")]
    NonPhysicalShear {
        /// The offending value.
        radicand: f64,
    },

    /// Normalization of a zero-norm vector.
    #[error("{name} has zero length and cannot be normalized")]
    DegenerateVector {
        /// Which vector collapsed.
        name: &'static str,
    },

    /// The requested geometric quantity is not defined for the input.
    #[error("undefined geometry: {0}")]
    UndefinedGeometry(String),

    /// A scalar or matrix argument is outside the accepted domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, TwinningError>;
