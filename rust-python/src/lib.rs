use pyo3::prelude::*;

// Module declarations
mod geometry;
mod numerics;
mod twinning;
mod utils;

use geometry::{PyLatticeVectorsAB, angle_tb_pair, latticevectors_ab};
use numerics::{apply_threshold, rotation_matrix};
use twinning::or_nc_twins;
use utils::version;

/// Python module definition
#[pymodule]
fn nc_twinning_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLatticeVectorsAB>()?;

    // Twin geometry
    m.add_function(wrap_pyfunction!(or_nc_twins, m)?)?;
    m.add_function(wrap_pyfunction!(angle_tb_pair, m)?)?;
    m.add_function(wrap_pyfunction!(latticevectors_ab, m)?)?;

    // Numerics
    m.add_function(wrap_pyfunction!(rotation_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(apply_threshold, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
