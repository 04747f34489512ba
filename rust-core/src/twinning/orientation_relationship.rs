//! Orientation relationship (OR) of non-conventional twins in the reference frame.
//!
//! For a twin plane K1, shear direction η1, transformation matrix rPm and lattice
//! parameter a, the calculation runs:
//!
//! 1. G = XᵗX with X = a·rPm (metric tensor of the physical lattice)
//! 2. s = sqrt(tr(CᵗGC·G⁻¹) − 3) (magnitude of the twinning shear)
//! 3. rm = K1·rPm⁻¹ and rl = rPm·η1, both normalized (plane normal and direction in R)
//! 4. rS = I + s·(rl ⊗ rm) (shear matrix)
//! 5. rL = rPm·C·rPm⁻¹·rS⁻¹
//!
//! The result is not thresholded; pass it through
//! [`apply_threshold`](crate::numerics::apply_threshold) for display.

use log::debug;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::RADICAND_TOLERANCE;
use crate::errors::{Result, TwinningError};
use crate::geometry::FrameTransform;
use crate::numerics::linalg::{all_finite, checked_inverse, dyadic, unit_vector};
use crate::numerics::rotation::axis_angle;
use crate::twinning::correspondence::CorrespondenceMatrix;

/// Orientation of the supplied K1 normal relative to the twin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalSense {
    /// The normal points into the twin.
    #[default]
    Positive,
    /// The normal points away from the twin; K1 and η1 are flipped before use.
    Negative,
}

impl NormalSense {
    pub fn apply(self, v: &Vector3<f64>) -> Vector3<f64> {
        match self {
            NormalSense::Positive => *v,
            NormalSense::Negative => -v,
        }
    }
}

impl From<bool> for NormalSense {
    fn from(normal_pos: bool) -> Self {
        if normal_pos {
            NormalSense::Positive
        } else {
            NormalSense::Negative
        }
    }
}

/// Intermediate and final quantities of one OR evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwinShear {
    /// Shear magnitude s.
    pub shear: f64,
    /// Unit twin plane normal rm in the reference frame.
    pub plane_normal: Vector3<f64>,
    /// Unit shear direction rl in the reference frame.
    pub shear_direction: Vector3<f64>,
    /// rS = I + s·(rl ⊗ rm).
    pub shear_matrix: Matrix3<f64>,
    /// rL, the orientation relationship.
    pub orientation: Matrix3<f64>,
}

impl TwinShear {
    /// Misorientation axis and angle (radians) of rL, if rL is a proper rotation within `tol`.
    pub fn misorientation(&self, tol: f64) -> Option<(Vector3<f64>, f64)> {
        axis_angle(&self.orientation, tol)
    }
}

/// One set of inputs for [`TwinSystem::orientation_relationships`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwinInput {
    pub k1: Vector3<f64>,
    pub eta1: Vector3<f64>,
    pub rpm: Matrix3<f64>,
    pub a: f64,
    #[serde(default)]
    pub sense: NormalSense,
}

/// Metric tensor G = XᵗX of the physical lattice X = a·rPm.
pub fn metric_tensor(rpm: &Matrix3<f64>, a: f64) -> Result<Matrix3<f64>> {
    Ok(FrameTransform::new(*rpm)?.metric_tensor(a))
}

/// Shear magnitude s = sqrt(tr(CᵗGC·G⁻¹) − 3).
///
/// Radicands within `RADICAND_TOLERANCE` of zero are rounding noise of a zero shear
/// and give `s = 0`. Negative values beyond that mean the lattice and the correspondence
/// do not describe a physical shear.
pub fn shear_magnitude(c: &Matrix3<f64>, g: &Matrix3<f64>) -> Result<f64> {
    let g_inv = checked_inverse(g, "metric tensor G")?;
    let radicand = (c.transpose() * g * c * g_inv).trace() - 3.0;

    if !radicand.is_finite() {
        return Err(TwinningError::NonPhysicalShear { radicand });
    }
    if radicand.abs() < RADICAND_TOLERANCE {
        // Zero shear up to rounding
        debug!("shear radicand {radicand:e} treated as zero");
        return Ok(0.0);
    }
    if radicand < 0.0 {
        return Err(TwinningError::NonPhysicalShear { radicand });
    }
    Ok(radicand.sqrt())
}

/// Shear matrix rS = I + s·(rl ⊗ rm).
pub fn shear_matrix(s: f64, rl: &Vector3<f64>, rm: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::identity() + dyadic(rl, rm) * s
}

/// A twin system, identified by its correspondence matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TwinSystem {
    correspondence: CorrespondenceMatrix,
}

impl TwinSystem {
    pub fn new(correspondence: CorrespondenceMatrix) -> Self {
        TwinSystem { correspondence }
    }

    pub fn nc_twin() -> Self {
        TwinSystem::new(CorrespondenceMatrix::nc_twin())
    }

    pub fn correspondence(&self) -> &CorrespondenceMatrix {
        &self.correspondence
    }

    /// Run the full OR calculation and keep every intermediate result.
    ///
    /// `k1` is a plane normal and `eta1` a direction, both in the crystal frame.
    pub fn analyze(
        &self,
        k1: &Vector3<f64>,
        eta1: &Vector3<f64>,
        rpm: &Matrix3<f64>,
        a: f64,
        sense: NormalSense,
    ) -> Result<TwinShear> {
        if !a.is_finite() {
            return Err(TwinningError::InvalidParameter(format!(
                "lattice parameter must be finite, got {a}"
            )));
        }
        if !all_finite(k1.iter()) || !all_finite(eta1.iter()) {
            return Err(TwinningError::InvalidParameter(
                "K1 and eta1 must have finite components".to_string(),
            ));
        }

        let k1 = sense.apply(k1);
        let eta1 = sense.apply(eta1);

        let frame = FrameTransform::new(*rpm)?;
        let c = self.correspondence.as_f64();

        let g = frame.metric_tensor(a);
        let s = shear_magnitude(&c, &g)?;

        // K1 is a plane normal: covariant, right-multiplied by rPm⁻¹
        let rm = unit_vector(&frame.plane_to_reference(&k1), "twin plane normal rm")?;
        // eta1 is a direction: contravariant, left-multiplied by rPm
        let rl = unit_vector(&frame.direction_to_reference(&eta1), "shear direction rl")?;
        debug!("twin shear s = {s}, rm = {rm:?}, rl = {rl:?}");

        let rs = shear_matrix(s, &rl, &rm);
        let rs_inv = checked_inverse(&rs, "shear matrix rS")?;

        let orientation = frame.matrix() * c * frame.inverse() * rs_inv;

        Ok(TwinShear {
            shear: s,
            plane_normal: rm,
            shear_direction: rl,
            shear_matrix: rs,
            orientation,
        })
    }

    /// The orientation relationship rL in the reference frame.
    pub fn orientation_relationship(
        &self,
        k1: &Vector3<f64>,
        eta1: &Vector3<f64>,
        rpm: &Matrix3<f64>,
        a: f64,
        sense: NormalSense,
    ) -> Result<Matrix3<f64>> {
        self.analyze(k1, eta1, rpm, a, sense)
            .map(|twin| twin.orientation)
    }

    /// rL for every input, in input order. Runs on the rayon pool with the `parallel` feature.
    pub fn orientation_relationships(&self, inputs: &[TwinInput]) -> Vec<Result<Matrix3<f64>>> {
        let evaluate = |input: &TwinInput| {
            self.orientation_relationship(&input.k1, &input.eta1, &input.rpm, input.a, input.sense)
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            inputs.par_iter().map(evaluate).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            inputs.iter().map(evaluate).collect()
        }
    }
}

/// OR of the non-conventional twin (C = [`NC_TWIN_CORRESPONDENCE`](super::NC_TWIN_CORRESPONDENCE))
/// in the reference frame.
///
/// `normal_pos` tells whether the K1 normal points into the twin; if not, both
/// `k1` and `eta1` are negated first.
///
/// # Example
/// ```
/// use nalgebra::{Matrix3, Vector3};
/// use nc_twinning::twinning::or_nc_twins;
///
/// let rl = or_nc_twins(
///     &Vector3::new(0.0, 1.0, 0.0),
///     &Vector3::new(1.0, 0.0, 0.0),
///     &Matrix3::identity(),
///     1.0,
///     true,
/// )
/// .unwrap();
/// // A cubic lattice needs no shear: the OR is the correspondence itself
/// assert_eq!(rl, Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0));
/// ```
pub fn or_nc_twins(
    k1: &Vector3<f64>,
    eta1: &Vector3<f64>,
    rpm: &Matrix3<f64>,
    a: f64,
    normal_pos: bool,
) -> Result<Matrix3<f64>> {
    TwinSystem::nc_twin().orientation_relationship(k1, eta1, rpm, a, normal_pos.into())
}

/// [`or_nc_twins`] over many inputs.
pub fn or_nc_twins_batch(inputs: &[TwinInput]) -> Vec<Result<Matrix3<f64>>> {
    TwinSystem::nc_twin().orientation_relationships(inputs)
}
