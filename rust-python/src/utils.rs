//! Utility functions for the nc-twinning Python module
use nalgebra::{Matrix3, Vector3};
use nc_twinning::TwinningError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Get the version of the nc-twinning library
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub(crate) fn to_py_err(e: TwinningError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Shapes accepted for a 3-vector: (3,), (1, 3) and (3, 1)
#[derive(Debug, Clone, Copy, PartialEq, FromPyObject)]
pub(crate) enum VectorShape {
    Flat([f64; 3]),
    Row([[f64; 3]; 1]),
    Column([[f64; 1]; 3]),
}

impl From<VectorShape> for Vector3<f64> {
    fn from(shape: VectorShape) -> Self {
        match shape {
            VectorShape::Flat(v) | VectorShape::Row([v]) => Vector3::from(v),
            VectorShape::Column([[x], [y], [z]]) => Vector3::new(x, y, z),
        }
    }
}

/// 3-vector argument: a list, tuple or numpy array of shape (3,), (1, 3) or (3, 1)
pub(crate) struct PyVector3(pub Vector3<f64>);

impl<'py> FromPyObject<'py> for PyVector3 {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        let shape: VectorShape = as_nested_list(ob)?.extract()?;
        Ok(PyVector3(shape.into()))
    }
}

/// 3x3 matrix argument, row-major: nested lists, tuples or a numpy array
pub(crate) struct PyMatrix3(pub Matrix3<f64>);

impl<'py> FromPyObject<'py> for PyMatrix3 {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        let rows: [[f64; 3]; 3] = as_nested_list(ob)?.extract()?;
        Ok(PyMatrix3(matrix_from_rows(rows)))
    }
}

/// numpy arrays are not Python sequences; convert them through `tolist()`
pub(crate) fn as_nested_list<'py>(ob: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    if ob.hasattr("tolist")? {
        ob.call_method0("tolist")
    } else {
        Ok(ob.clone())
    }
}

/// Row-major nested list → matrix
pub(crate) fn matrix_from_rows(rows: [[f64; 3]; 3]) -> Matrix3<f64> {
    Matrix3::from_fn(|i, j| rows[i][j])
}

/// Matrix → row-major nested list
pub(crate) fn matrix_to_py(m: &Matrix3<f64>) -> [[f64; 3]; 3] {
    [
        [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
        [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
        [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_shapes_squeeze_to_the_same_vector() {
        let expected = Vector3::new(1.0, -1.0, 0.5);
        let shapes = [
            VectorShape::Flat([1.0, -1.0, 0.5]),
            VectorShape::Row([[1.0, -1.0, 0.5]]),
            VectorShape::Column([[1.0], [-1.0], [0.5]]),
        ];
        for shape in shapes {
            assert_eq!(Vector3::from(shape), expected);
        }
    }

    #[test]
    fn test_matrix_rows_round_trip() {
        let rows = [[1.0, 0.3, 0.1], [0.0, 1.1, -0.2], [0.0, 0.0, 1.4]];
        let m = matrix_from_rows(rows);
        assert_eq!(m[(0, 1)], 0.3);
        assert_eq!(m[(1, 2)], -0.2);
        assert_eq!(matrix_to_py(&m), rows);
    }
}
