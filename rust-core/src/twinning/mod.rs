// Twinning module: Orientation relationships (ORs) of non-conventional mechanical twins
// This module builds the shear of a twin system from its correspondence matrix and the lattice metric

// ======================== MODULE DECLARATIONS ========================
pub mod correspondence;
pub mod orientation_relationship;


// ======================== TWIN SYSTEM DEFINITION ========================
pub use correspondence::{
    CorrespondenceMatrix,   // struct - non-singular integer matrix mapping parent to twin lattice vectors
    NC_TWIN_CORRESPONDENCE, // const - [[0,-1,0],[1,0,0],[0,0,1]], the non-conventional twin
};
// CorrespondenceMatrix impl methods:
//   new(matrix: Matrix3<i8>) -> Result<Self>          - rejects singular matrices
//   from_rows(rows: [[i8; 3]; 3]) -> Result<Self>     - same, row-major input
//   nc_twin() -> Self                                 - the NC_TWIN_CORRESPONDENCE matrix
//   matrix(&self) -> &Matrix3<i8>
//   as_f64(&self) -> Matrix3<f64>

// ======================== OR CALCULATION ========================
pub use orientation_relationship::{
    NormalSense,           // enum - whether the K1 normal points into the twin (Positive) or away (Negative)
    TwinInput,             // struct - one (K1, η1, rPm, a, sense) set for batch evaluation
    TwinShear,             // struct - s, rm, rl, rS and rL of one evaluation
    TwinSystem,            // struct - a correspondence matrix plus the OR machinery
    metric_tensor,         // fn(rpm: &Matrix3<f64>, a: f64) -> Result<Matrix3<f64>> - G = (a·rPm)ᵗ(a·rPm)
    or_nc_twins,           // fn(k1, eta1, rpm, a, normal_pos: bool) -> Result<Matrix3<f64>> - rL for the NC twin
    or_nc_twins_batch,     // fn(inputs: &[TwinInput]) -> Vec<Result<Matrix3<f64>>> - rL for many inputs
    shear_magnitude,       // fn(c: &Matrix3<f64>, g: &Matrix3<f64>) -> Result<f64> - s = sqrt(tr(CᵗGC·G⁻¹) − 3)
    shear_matrix,          // fn(s: f64, rl: &Vector3<f64>, rm: &Vector3<f64>) -> Matrix3<f64> - I + s·rl⊗rm
};
// TwinSystem impl methods:
//   new(correspondence: CorrespondenceMatrix) -> Self
//   nc_twin() -> Self
//   analyze(&self, k1, eta1, rpm, a, sense) -> Result<TwinShear>                  - full breakdown
//   orientation_relationship(&self, k1, eta1, rpm, a, sense) -> Result<Matrix3<f64>> - rL only
//   orientation_relationships(&self, inputs: &[TwinInput]) -> Vec<Result<Matrix3<f64>>>
