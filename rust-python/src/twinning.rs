use nc_twinning::twinning::or_nc_twins as or_nc;
use pyo3::prelude::*;

use crate::utils::{PyMatrix3, PyVector3, matrix_to_py, to_py_err};

/// Orientation relationship of non-conventional twins in the reference frame
///
/// Args:
///     k1: twin boundary plane in the crystal frame, shape (3,), (1, 3) or (3, 1)
///     eta1: shear direction in the crystal frame, same shapes as k1
///     rpm: transformation matrix (crystal frame -> reference frame), row-major 3x3
///     a: lattice parameter of a
///     normal_pos: the plane normal points to the twin (default True)
///
/// Returns:
///     3x3 nested list, not thresholded
///
/// Raises:
///     ValueError: singular rPm, metric tensor or shear matrix, degenerate K1/eta1
#[pyfunction]
#[pyo3(signature = (k1, eta1, rpm, a, normal_pos = true))]
pub fn or_nc_twins(
    k1: PyVector3,
    eta1: PyVector3,
    rpm: PyMatrix3,
    a: f64,
    normal_pos: bool,
) -> PyResult<[[f64; 3]; 3]> {
    or_nc(
        &k1.0,
        &eta1.0,
        &rpm.0,
        a,
        normal_pos,
    )
    .map(|m| matrix_to_py(&m))
    .map_err(to_py_err)
}
