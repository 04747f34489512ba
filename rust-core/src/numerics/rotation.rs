use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::config::{DEFAULT_THRESHOLD, NORM_TOLERANCE};
use crate::errors::{Result, TwinningError};
use crate::numerics::linalg::all_finite;
use crate::numerics::threshold::apply_threshold;

/// Rotation matrix for a rotation by `theta` (radians) about `axis`.
///
/// The axis does not need to be normalized, but it must not be the zero vector.
/// Entries below `DEFAULT_THRESHOLD` in magnitude are snapped to zero, so
/// quarter turns come out as exact integer matrices.
///
/// # Example
/// ```
/// use nalgebra::{Matrix3, Vector3};
/// use nc_twinning::numerics::rotation_matrix;
///
/// let r = rotation_matrix(&Vector3::z(), std::f64::consts::FRAC_PI_2).unwrap();
/// assert_eq!(r, Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0));
/// ```
pub fn rotation_matrix(axis: &Vector3<f64>, theta: f64) -> Result<Matrix3<f64>> {
    if !theta.is_finite() {
        return Err(TwinningError::InvalidParameter(format!(
            "rotation angle must be finite, got {theta}"
        )));
    }

    let norm = axis.norm();
    if !all_finite(axis.iter()) || norm < NORM_TOLERANCE {
        return Err(TwinningError::DegenerateVector {
            name: "rotation axis",
        });
    }

    let u = axis / norm;
    let (ux, uy, uz) = (u.x, u.y, u.z);
    let (sin, cos) = theta.sin_cos();
    let omc = 1.0 - cos;

    let r = Matrix3::new(
        cos + ux * ux * omc,
        ux * uy * omc - uz * sin,
        ux * uz * omc + uy * sin,
        //
        uy * ux * omc + uz * sin,
        cos + uy * uy * omc,
        uy * uz * omc - ux * sin,
        //
        uz * ux * omc - uy * sin,
        uz * uy * omc + ux * sin,
        cos + uz * uz * omc,
    );

    Ok(apply_threshold(r, DEFAULT_THRESHOLD))
}

/// Same as [`rotation_matrix`] with the angle given in degrees.
pub fn rotation_matrix_degrees(axis: &Vector3<f64>, degrees: f64) -> Result<Matrix3<f64>> {
    rotation_matrix(axis, degrees.to_radians())
}

/// Check RᵗR = I and det R = +1 within `tol`.
pub fn is_proper_rotation(m: &Matrix3<f64>, tol: f64) -> bool {
    let orthogonality = (m.transpose() * m - Matrix3::identity()).amax();
    orthogonality < tol && (m.determinant() - 1.0).abs() < tol
}

/// Axis (unit) and angle (radians, in (0, π]) of a proper rotation.
///
/// Returns `None` if `m` is not a proper rotation within `tol`, or if it is the
/// identity and therefore has no axis.
pub fn axis_angle(m: &Matrix3<f64>, tol: f64) -> Option<(Vector3<f64>, f64)> {
    if !is_proper_rotation(m, tol) {
        return None;
    }
    Rotation3::from_matrix_unchecked(*m)
        .axis_angle()
        .map(|(axis, angle)| (axis.into_inner(), angle))
}
