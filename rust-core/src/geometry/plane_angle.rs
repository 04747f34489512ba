//! Angle between the traces of two crystal planes on the reference [x,y] plane.
//!
//! A plane with reference-frame normal (nₓ, n_y, n_z) cuts the [x,y]ᵣ plane along a line
//! of slope m = −nₓ/n_y. Two such lines enclose the acute angle atan|(m₁ − m₂)/(1 + m₁m₂)|.
//! Vertical traces (n_y = 0) and perpendicular pairs (1 + m₁m₂ = 0) are handled
//! explicitly instead of producing infinities.

use log::trace;
use nalgebra::{Matrix3, Vector2, Vector3};

use crate::config::{NORM_TOLERANCE, SLOPE_TOLERANCE};
use crate::errors::{Result, TwinningError};
use crate::geometry::frame_transform::FrameTransform;

/// Slope of a trace line in [x,y]ᵣ.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TraceSlope {
    Finite(f64),
    Vertical,
}

/// Unit reference-frame normal of plane `k_m`, rejecting planes without a trace.
fn reference_normal(
    frame: &FrameTransform,
    k_m: &Vector3<f64>,
    name: &'static str,
) -> Result<Vector3<f64>> {
    // Checked in the crystal frame; rPm⁻¹ maps only the zero vector to zero
    let norm = k_m.norm();
    if !norm.is_finite() || norm < NORM_TOLERANCE {
        return Err(TwinningError::DegenerateVector { name });
    }

    // Plane normal: covariant transform
    let k_r = frame.plane_to_reference(&(k_m / norm));
    let n = k_r / k_r.norm();

    if n.x.abs() < SLOPE_TOLERANCE && n.y.abs() < SLOPE_TOLERANCE {
        return Err(TwinningError::UndefinedGeometry(format!(
            "{name} is parallel to the reference [x,y] plane and leaves no trace"
        )));
    }
    Ok(n)
}

fn trace_slope(n: &Vector3<f64>) -> TraceSlope {
    if n.y.abs() < SLOPE_TOLERANCE {
        TraceSlope::Vertical
    } else {
        TraceSlope::Finite(-n.x / n.y)
    }
}

/// Angle in degrees, within [0, 90], between the traces of planes `k1_m` and `k2_m`
/// (both given in the crystal frame) on the reference [x,y] plane.
///
/// Symmetric in its two plane arguments, and 0 for identical planes.
pub fn angle_between_planes(
    rpm: &Matrix3<f64>,
    k1_m: &Vector3<f64>,
    k2_m: &Vector3<f64>,
) -> Result<f64> {
    let frame = FrameTransform::new(*rpm)?;
    let n1 = reference_normal(&frame, k1_m, "plane k1")?;
    let n2 = reference_normal(&frame, k2_m, "plane k2")?;

    let phi = match (trace_slope(&n1), trace_slope(&n2)) {
        (TraceSlope::Vertical, TraceSlope::Vertical) => 0.0,
        (TraceSlope::Vertical, TraceSlope::Finite(m)) | (TraceSlope::Finite(m), TraceSlope::Vertical) => {
            90.0 - m.abs().atan().to_degrees()
        }
        (TraceSlope::Finite(m1), TraceSlope::Finite(m2)) => {
            let denominator = 1.0 + m1 * m2;
            if denominator.abs() < SLOPE_TOLERANCE {
                90.0
            } else {
                ((m1 - m2) / denominator).abs().atan().to_degrees()
            }
        }
    };

    trace!("trace angle between {k1_m:?} and {k2_m:?}: {phi}°");
    Ok(phi)
}

/// Unit direction of the trace line of plane `k_m` on the reference [x,y] plane.
///
/// The sign is fixed so that the direction is (n_y, −nₓ) normalized, with n the
/// reference-frame plane normal.
pub fn trace_direction(rpm: &Matrix3<f64>, k_m: &Vector3<f64>) -> Result<Vector2<f64>> {
    let frame = FrameTransform::new(*rpm)?;
    let n = reference_normal(&frame, k_m, "plane k")?;
    Ok(Vector2::new(n.y, -n.x).normalize())
}
