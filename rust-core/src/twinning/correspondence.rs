use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TwinningError};

/// Correspondence matrix of the non-conventional twin: a quarter turn about cₘ.
pub const NC_TWIN_CORRESPONDENCE: [[i8; 3]; 3] = [[0, -1, 0], [1, 0, 0], [0, 0, 1]];

/// Integer matrix C mapping parent lattice vectors onto the lattice vectors they
/// become after the twinning shear. A structural constant of the twin system.
///
/// Serialized as row-major nested arrays; deserialization rejects singular matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[[i8; 3]; 3]", into = "[[i8; 3]; 3]")]
pub struct CorrespondenceMatrix(Matrix3<i8>);

impl CorrespondenceMatrix {
    pub fn new(matrix: Matrix3<i8>) -> Result<Self> {
        if matrix.map(f64::from).determinant() == 0.0 {
            return Err(TwinningError::InvalidParameter(format!(
                "correspondence matrix {matrix:?} is singular"
            )));
        }
        Ok(CorrespondenceMatrix(matrix))
    }

    pub fn from_rows(rows: [[i8; 3]; 3]) -> Result<Self> {
        Self::new(Matrix3::from_fn(|i, j| rows[i][j]))
    }

    pub fn nc_twin() -> Self {
        CorrespondenceMatrix(Matrix3::from_fn(|i, j| NC_TWIN_CORRESPONDENCE[i][j]))
    }

    pub fn matrix(&self) -> &Matrix3<i8> {
        &self.0
    }

    pub fn as_f64(&self) -> Matrix3<f64> {
        self.0.map(f64::from)
    }
}

impl TryFrom<[[i8; 3]; 3]> for CorrespondenceMatrix {
    type Error = TwinningError;

    fn try_from(rows: [[i8; 3]; 3]) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<CorrespondenceMatrix> for [[i8; 3]; 3] {
    fn from(c: CorrespondenceMatrix) -> Self {
        let m = c.0;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }
}

impl Default for CorrespondenceMatrix {
    fn default() -> Self {
        Self::nc_twin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::rotation_matrix;
    use nalgebra::Vector3;

    #[test]
    fn test_nc_twin_is_quarter_turn_about_c() {
        let quarter_turn = rotation_matrix(&Vector3::z(), std::f64::consts::FRAC_PI_2).unwrap();
        assert_eq!(CorrespondenceMatrix::nc_twin().as_f64(), quarter_turn);
        assert_eq!(CorrespondenceMatrix::default(), CorrespondenceMatrix::nc_twin());
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let c = CorrespondenceMatrix::from_rows(NC_TWIN_CORRESPONDENCE).unwrap();
        assert_eq!(c.matrix()[(0, 1)], -1);
        assert_eq!(c.matrix()[(1, 0)], 1);
        assert_eq!(c, CorrespondenceMatrix::nc_twin());
    }

    #[test]
    fn test_singular_correspondence_is_rejected() {
        let err = CorrespondenceMatrix::from_rows([[1, 0, 0], [2, 0, 0], [0, 0, 1]]).unwrap_err();
        assert!(matches!(err, TwinningError::InvalidParameter(_)));
    }

    #[test]
    fn test_other_twin_systems_are_accepted() {
        // Swaps a and c and reverses b
        let mirror = CorrespondenceMatrix::from_rows([[0, 0, 1], [0, -1, 0], [1, 0, 0]]).unwrap();
        assert_eq!(mirror.as_f64().determinant(), 1.0);
    }

    #[test]
    fn test_serialized_as_rows() {
        let json = serde_json::to_string(&CorrespondenceMatrix::nc_twin()).unwrap();
        assert_eq!(json, "[[0,-1,0],[1,0,0],[0,0,1]]");
        let back: CorrespondenceMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CorrespondenceMatrix::nc_twin());
    }

    #[test]
    fn test_deserializing_singular_matrix_fails() {
        let err = serde_json::from_str::<CorrespondenceMatrix>("[[1,0,0],[2,0,0],[0,0,1]]")
            .unwrap_err();
        assert!(err.to_string().contains("is singular"));

        let system = serde_json::from_str::<crate::twinning::TwinSystem>(
            r#"{"correspondence":[[0,0,0],[0,1,0],[0,0,1]]}"#,
        );
        assert!(system.is_err());
    }
}
