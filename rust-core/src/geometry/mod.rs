// Geometry module: Frame changes between crystal and reference frame, and quantities derived from them
// This module provides the covariant/contravariant bookkeeping used by the twinning calculations

// ======================== MODULE DECLARATIONS ========================
pub mod frame_transform;
pub mod lattice_vectors;
pub mod plane_angle;

mod _tests_plane_angle;

// ======================== FRAME TRANSFORMATION ========================
pub use frame_transform::FrameTransform; // struct - validated rPm together with its inverse
// FrameTransform impl methods:
//   new(matrix: Matrix3<f64>) -> Result<Self>                       - rejects singular or non-finite rPm
//   from_rows(rows: [[f64; 3]; 3]) -> Result<Self>                  - same, row-major input
//   plane_to_reference(&self, k_m: &Vector3<f64>) -> Vector3<f64>   - k_m · rPm⁻¹ (covariant)
//   direction_to_reference(&self, d_m: &Vector3<f64>) -> Vector3<f64> - rPm · d_m (contravariant)
//   plane_to_crystal(&self, k_r: &Vector3<f64>) -> Vector3<f64>     - k_r · rPm
//   direction_to_crystal(&self, d_r: &Vector3<f64>) -> Vector3<f64> - rPm⁻¹ · d_r
//   transform(&self, v, kind: VectorKind, from: Frame) -> Vector3<f64> - dispatches on kind and source frame
//   metric_tensor(&self, a: f64) -> Matrix3<f64>                    - G = (a·rPm)ᵗ(a·rPm)
//   matrix(&self) / inverse(&self) / determinant(&self)

// ======================== PLANE TRACES ========================
pub use plane_angle::{
    angle_between_planes, // fn(rpm: &Matrix3<f64>, k1_m: &Vector3<f64>, k2_m: &Vector3<f64>) -> Result<f64> - degrees in [0, 90]
    trace_direction,      // fn(rpm: &Matrix3<f64>, k_m: &Vector3<f64>) -> Result<Vector2<f64>> - unit trace line in [x,y]ᵣ
};

// ======================== LATTICE VECTOR ARROWS ========================
pub use lattice_vectors::{
    LatticeVectorsAB,   // struct - in-plane components of aₘ and bₘ in the reference frame
    QUIVER_SCALE,       // const - arrow scale used when drawing the vectors
    lattice_vectors_ab, // fn(rpm: &Matrix3<f64>) -> LatticeVectorsAB
};
