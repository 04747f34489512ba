use nalgebra::{Matrix3, Vector3};

use crate::config::{NORM_TOLERANCE, SINGULARITY_TOLERANCE};
use crate::errors::{Result, TwinningError};

/// Invert a 3×3 matrix, reporting a named [`TwinningError::SingularMatrix`] on failure.
///
/// `name` ends up in the error message, e.g. `"metric tensor G"`.
pub fn checked_inverse(m: &Matrix3<f64>, name: &'static str) -> Result<Matrix3<f64>> {
    let determinant = m.determinant();
    if is_singular(m, determinant) {
        return Err(TwinningError::SingularMatrix { name, determinant });
    }

    m.try_inverse()
        .ok_or(TwinningError::SingularMatrix { name, determinant })
}

/// True if `determinant` is negligible next to the scale of `m`: |det m| ≤ tol·‖m‖³.
///
/// Both sides grow with the cube of a uniform scale factor, so a lattice given in
/// metres and the same lattice in ångström get the same answer.
pub fn is_singular(m: &Matrix3<f64>, determinant: f64) -> bool {
    !determinant.is_finite() || determinant.abs() <= SINGULARITY_TOLERANCE * m.norm().powi(3)
}

/// Normalize `v` to unit length.
pub fn unit_vector(v: &Vector3<f64>, name: &'static str) -> Result<Vector3<f64>> {
    let norm = v.norm();
    if !norm.is_finite() || norm < NORM_TOLERANCE {
        return Err(TwinningError::DegenerateVector { name });
    }
    Ok(v / norm)
}

/// Dyadic (outer) product l ⊗ m: row i is `l[i] * m`.
pub fn dyadic(l: &Vector3<f64>, m: &Vector3<f64>) -> Matrix3<f64> {
    l * m.transpose()
}

/// True if every entry is finite.
pub(crate) fn all_finite<'a>(values: impl IntoIterator<Item = &'a f64>) -> bool {
    values.into_iter().all(|x| x.is_finite())
}
