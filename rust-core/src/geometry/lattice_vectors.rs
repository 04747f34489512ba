// Lattice vector arrows: the data a 2D quiver plot of aₘ and bₘ consumes
// Rendering is left to the caller; only the arrow geometry is computed here

use nalgebra::{Matrix3, Vector2};
use serde::{Deserialize, Serialize};

use crate::config::NORM_TOLERANCE;
use crate::errors::{Result, TwinningError};

/// Scale factor the arrows are drawn with (quiver `scale`).
pub const QUIVER_SCALE: f64 = 2.5;

/// In-plane ([x,y]ᵣ) components of the lattice vectors aₘ and bₘ.
///
/// Assumes cₘ is orthogonal to both, so the z components carry no information for the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeVectorsAB {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl LatticeVectorsAB {
    /// Angle γ between the two arrows in degrees.
    pub fn gamma_degrees(&self) -> Result<f64> {
        if self.a.norm() < NORM_TOLERANCE {
            return Err(TwinningError::DegenerateVector {
                name: "lattice vector a",
            });
        }
        if self.b.norm() < NORM_TOLERANCE {
            return Err(TwinningError::DegenerateVector {
                name: "lattice vector b",
            });
        }
        Ok(self.a.angle(&self.b).to_degrees())
    }

    /// Arrow origins and components as `(x, y, u, v)`, both arrows anchored at the origin.
    pub fn quiver(&self) -> ([f64; 2], [f64; 2], [f64; 2], [f64; 2]) {
        (
            [0.0, 0.0],
            [0.0, 0.0],
            [self.a.x, self.b.x],
            [self.a.y, self.b.y],
        )
    }
}

/// Columns 0 and 1 of rPm restricted to their x and y rows.
pub fn lattice_vectors_ab(rpm: &Matrix3<f64>) -> LatticeVectorsAB {
    LatticeVectorsAB {
        a: Vector2::new(rpm[(0, 0)], rpm[(1, 0)]),
        b: Vector2::new(rpm[(0, 1)], rpm[(1, 1)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arrows_are_columns_of_rpm() {
        let rpm = Matrix3::new(
            1.0, 0.5, 0.0,
            0.0, 0.8660254037844386, 0.0,
            0.0, 0.0, 1.6,
        );
        let arrows = lattice_vectors_ab(&rpm);
        assert_eq!(arrows.a, Vector2::new(1.0, 0.0));
        assert_eq!(arrows.b, Vector2::new(0.5, 0.8660254037844386));
        assert_relative_eq!(arrows.gamma_degrees().unwrap(), 60.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quiver_layout() {
        let rpm = Matrix3::new(
            1.0, 2.0, 0.0,
            3.0, 4.0, 0.0,
            0.0, 0.0, 1.0,
        );
        let (x, y, u, v) = lattice_vectors_ab(&rpm).quiver();
        assert_eq!(x, [0.0, 0.0]);
        assert_eq!(y, [0.0, 0.0]);
        // u holds the x rows, v the y rows
        assert_eq!(u, [1.0, 2.0]);
        assert_eq!(v, [3.0, 4.0]);
    }

    #[test]
    fn test_gamma_of_degenerate_arrow() {
        let rpm = Matrix3::new(
            0.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
            1.0, 0.0, 1.0,
        );
        assert_eq!(
            lattice_vectors_ab(&rpm).gamma_degrees(),
            Err(TwinningError::DegenerateVector {
                name: "lattice vector a"
            })
        );
    }
}
