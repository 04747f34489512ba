use nalgebra::{Matrix3, Vector3};

use crate::errors::{Result, TwinningError};
use crate::interfaces::{Frame, VectorKind};
use crate::numerics::linalg::{all_finite, is_singular};

/// Change of basis between the crystal frame (m) and the reference frame (R).
///
/// Holds rPm and its inverse. Plane normals and directions transform differently:
///
/// * a plane normal is a row vector, k_R = k_m · rPm⁻¹
/// * a direction is a column vector, d_R = rPm · d_m
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTransform {
    matrix: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

impl FrameTransform {
    pub fn new(matrix: Matrix3<f64>) -> Result<Self> {
        if !all_finite(matrix.iter()) {
            return Err(TwinningError::InvalidParameter(
                "transformation matrix rPm has non-finite entries".to_string(),
            ));
        }

        // Invertibility is checked once here; every accessor below relies on it
        let determinant = matrix.determinant();
        let singular = TwinningError::SingularMatrix {
            name: "transformation matrix rPm",
            determinant,
        };
        if is_singular(&matrix, determinant) {
            return Err(singular);
        }
        let inverse = matrix.try_inverse().ok_or(singular)?;

        Ok(FrameTransform { matrix, inverse })
    }

    pub fn from_rows(rows: [[f64; 3]; 3]) -> Result<Self> {
        Self::new(Matrix3::from_fn(|i, j| rows[i][j]))
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn inverse(&self) -> &Matrix3<f64> {
        &self.inverse
    }

    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Plane normal, crystal → reference: k_m · rPm⁻¹.
    pub fn plane_to_reference(&self, k_m: &Vector3<f64>) -> Vector3<f64> {
        // (kᵗ·rPm⁻¹)ᵗ = rPm⁻ᵗ·k
        self.inverse.tr_mul(k_m)
    }

    /// Direction, crystal → reference: rPm · d_m.
    pub fn direction_to_reference(&self, d_m: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * d_m
    }

    /// Plane normal, reference → crystal: k_R · rPm.
    pub fn plane_to_crystal(&self, k_r: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.tr_mul(k_r)
    }

    /// Direction, reference → crystal: rPm⁻¹ · d_R.
    pub fn direction_to_crystal(&self, d_r: &Vector3<f64>) -> Vector3<f64> {
        self.inverse * d_r
    }

    /// Convert `v` out of frame `from` into the other frame.
    pub fn transform(&self, v: &Vector3<f64>, kind: VectorKind, from: Frame) -> Vector3<f64> {
        match (kind, from) {
            (VectorKind::PlaneNormal, Frame::Crystal) => self.plane_to_reference(v),
            (VectorKind::PlaneNormal, Frame::Reference) => self.plane_to_crystal(v),
            (VectorKind::Direction, Frame::Crystal) => self.direction_to_reference(v),
            (VectorKind::Direction, Frame::Reference) => self.direction_to_crystal(v),
        }
    }

    /// Metric tensor G = XᵗX of the physical lattice X = a·rPm.
    ///
    /// rPm is stored with the lattice parameter `a` divided out; multiplying it back
    /// recovers the real lattice vector lengths.
    pub fn metric_tensor(&self, a: f64) -> Matrix3<f64> {
        let x = self.matrix * a;
        x.transpose() * x
    }
}
