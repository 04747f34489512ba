use nc_twinning::config::DEFAULT_THRESHOLD;
use nc_twinning::numerics::{apply_threshold as threshold, rotation_matrix as rotation};
use pyo3::prelude::*;

use crate::utils::{PyVector3, as_nested_list, matrix_to_py, to_py_err};

/// Scalars, vectors and matrices accepted by `apply_threshold`
#[derive(FromPyObject)]
pub enum ThresholdInput {
    Scalar(f64),
    Vector(Vec<f64>),
    Matrix(Vec<Vec<f64>>),
}

/// Rotation matrix for a rotation by theta (radians) about r
///
/// Args:
///     r: rotation axis [x, y, z] of shape (3,), (1, 3) or (3, 1), need not be normalized
///     theta: rotation angle in radians
///
/// Returns:
///     3x3 nested list, entries below 1e-9 set to zero
#[pyfunction]
pub fn rotation_matrix(r: PyVector3, theta: f64) -> PyResult<[[f64; 3]; 3]> {
    rotation(&r.0, theta)
        .map(|m| matrix_to_py(&m))
        .map_err(to_py_err)
}

/// Return a copy of p with every entry |e| < t replaced by 0
///
/// Unlike numpy-style in-place masking, the argument is never modified.
#[pyfunction]
#[pyo3(signature = (p, t = DEFAULT_THRESHOLD))]
pub fn apply_threshold(py: Python<'_>, p: &Bound<'_, PyAny>, t: f64) -> PyResult<PyObject> {
    let p: ThresholdInput = as_nested_list(p)?.extract()?;
    Ok(match p {
        ThresholdInput::Scalar(x) => threshold(x, t).into_py(py),
        ThresholdInput::Vector(v) => threshold(v, t).into_py(py),
        ThresholdInput::Matrix(m) => threshold(m, t).into_py(py),
    })
}
