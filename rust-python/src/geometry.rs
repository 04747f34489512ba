use nc_twinning::geometry::{LatticeVectorsAB, angle_between_planes, lattice_vectors_ab, QUIVER_SCALE};
use pyo3::prelude::*;

use crate::utils::{PyMatrix3, PyVector3, to_py_err};

/// Angle in degrees between the traces of planes k1_m and k2_m on the reference [x,y] plane
#[pyfunction]
pub fn angle_tb_pair(rpm: PyMatrix3, k1_m: PyVector3, k2_m: PyVector3) -> PyResult<f64> {
    angle_between_planes(&rpm.0, &k1_m.0, &k2_m.0).map_err(to_py_err)
}

/// Arrow data for a quiver plot of the lattice vectors a and b
#[pyclass(name = "LatticeVectorsAB")]
#[derive(Clone)]
pub struct PyLatticeVectorsAB {
    inner: LatticeVectorsAB,
}

#[pymethods]
impl PyLatticeVectorsAB {
    /// In-plane components of a in the reference frame
    #[getter]
    fn a(&self) -> [f64; 2] {
        [self.inner.a.x, self.inner.a.y]
    }

    /// In-plane components of b in the reference frame
    #[getter]
    fn b(&self) -> [f64; 2] {
        [self.inner.b.x, self.inner.b.y]
    }

    /// Angle between a and b in degrees
    fn gamma(&self) -> PyResult<f64> {
        self.inner.gamma_degrees().map_err(to_py_err)
    }

    /// (x, y, u, v) arrays for matplotlib's quiver, plus the scale to draw with
    fn quiver(&self) -> ([f64; 2], [f64; 2], [f64; 2], [f64; 2], f64) {
        let (x, y, u, v) = self.inner.quiver();
        (x, y, u, v, QUIVER_SCALE)
    }

    fn __repr__(&self) -> String {
        format!(
            "LatticeVectorsAB(a=[{:.4}, {:.4}], b=[{:.4}, {:.4}])",
            self.inner.a.x, self.inner.a.y, self.inner.b.x, self.inner.b.y
        )
    }
}

/// Lattice vectors a and b projected onto the reference [x,y] plane
#[pyfunction]
pub fn latticevectors_ab(rpm: PyMatrix3) -> PyLatticeVectorsAB {
    PyLatticeVectorsAB {
        inner: lattice_vectors_ab(&rpm.0),
    }
}
