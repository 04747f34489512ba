#[cfg(test)]
mod _tests_plane_angle {
    use super::super::plane_angle::*;
    use crate::errors::TwinningError;
    use crate::numerics::rotation_matrix;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};

    const TOL: f64 = 1e-10;

    fn v(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3::new(x, y, z)
    }

    #[test]
    fn test_standard_angles_with_identity_frame() {
        let rpm = Matrix3::identity();
        assert_relative_eq!(
            angle_between_planes(&rpm, &v(1.0, 1.0, 0.0), &v(0.0, 1.0, 0.0)).unwrap(),
            45.0,
            epsilon = TOL
        );
        assert_relative_eq!(
            angle_between_planes(&rpm, &v(1.0, 2.0, 0.0), &v(1.0, -1.0, 0.0)).unwrap(),
            71.56505117707799,
            epsilon = TOL
        );
    }

    #[test]
    fn test_scaled_frame() {
        // b stretched by 1.2: (110) and (1-10) are no longer perpendicular
        let rpm = Matrix3::from_diagonal(&v(1.0, 1.2, 1.0));
        assert_relative_eq!(
            angle_between_planes(&rpm, &v(1.0, 1.0, 0.0), &v(1.0, -1.0, 0.0)).unwrap(),
            79.6111421845304,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_uniformly_scaled_frame() {
        // rPm in physical units: only directions matter for the traces
        let rpm = Matrix3::from_diagonal(&v(1.0, 1.2, 1.0));
        for scale in [1e-5, 3.2e-10, 1e8] {
            assert_relative_eq!(
                angle_between_planes(&(rpm * scale), &v(1.0, 1.0, 0.0), &v(1.0, -1.0, 0.0)).unwrap(),
                79.6111421845304,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_identical_planes_give_zero() {
        let rpm = Matrix3::new(
            1.0, 0.2, 0.0,
            0.1, 0.9, 0.0,
            0.0, 0.0, 1.3,
        );
        for k in [v(1.0, 1.0, 0.0), v(2.0, -1.0, 1.0), v(1.0, 0.0, 0.0)] {
            assert_eq!(angle_between_planes(&rpm, &k, &k).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_symmetric_in_plane_arguments() {
        let rpm = Matrix3::new(
            1.0, 0.2, 0.0,
            0.1, 0.9, 0.0,
            0.0, 0.0, 1.3,
        );
        let planes = [
            v(1.0, 1.0, 0.0),
            v(1.0, -1.0, 0.0),
            v(2.0, 1.0, 1.0),
            v(0.0, 1.0, 0.0),
            v(1.0, 0.0, 2.0),
        ];
        for k1 in &planes {
            for k2 in &planes {
                let forward = angle_between_planes(&rpm, k1, k2).unwrap();
                let backward = angle_between_planes(&rpm, k2, k1).unwrap();
                assert_eq!(forward, backward);
                assert!((0.0..=90.0).contains(&forward));
            }
        }
    }

    #[test]
    fn test_perpendicular_traces() {
        let rpm = Matrix3::identity();
        // Slopes -1 and 1: 1 + m1·m2 = 0
        assert_eq!(
            angle_between_planes(&rpm, &v(1.0, 1.0, 0.0), &v(1.0, -1.0, 0.0)).unwrap(),
            90.0
        );
    }

    #[test]
    fn test_vertical_traces() {
        let rpm = Matrix3::identity();
        // (100) has a vertical trace, (010) a horizontal one
        assert_eq!(
            angle_between_planes(&rpm, &v(1.0, 0.0, 0.0), &v(0.0, 1.0, 0.0)).unwrap(),
            90.0
        );
        assert_relative_eq!(
            angle_between_planes(&rpm, &v(1.0, 0.0, 0.0), &v(1.0, 1.0, 0.0)).unwrap(),
            45.0,
            epsilon = TOL
        );
        assert_eq!(
            angle_between_planes(&rpm, &v(1.0, 0.0, 0.0), &v(2.0, 0.0, 1.0)).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_invariant_under_in_plane_rotation() {
        let rotated = rotation_matrix(&Vector3::z(), 0.4).unwrap();
        let pairs = [
            (v(1.0, 2.0, 0.0), v(1.0, -1.0, 0.0)),
            (v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)),
            (v(3.0, 1.0, 0.0), v(1.0, 1.0, 0.0)),
        ];
        for (k1, k2) in &pairs {
            let reference = angle_between_planes(&Matrix3::identity(), k1, k2).unwrap();
            let turned = angle_between_planes(&rotated, k1, k2).unwrap();
            assert_relative_eq!(reference, turned, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_agrees_with_trace_directions() {
        let rpm = Matrix3::new(
            1.0, 0.35, 0.0,
            -0.1, 1.05, 0.0,
            0.0, 0.0, 1.2,
        );
        let pairs = [
            (v(1.0, 1.0, 0.0), v(1.0, -1.0, 0.0)),
            (v(2.0, 1.0, 0.0), v(0.0, 1.0, 1.0)),
            (v(1.0, 3.0, 1.0), v(1.0, 0.0, 0.0)),
        ];
        for (k1, k2) in &pairs {
            let d1 = trace_direction(&rpm, k1).unwrap();
            let d2 = trace_direction(&rpm, k2).unwrap();
            let expected = d1.dot(&d2).abs().min(1.0).acos().to_degrees();
            let phi = angle_between_planes(&rpm, k1, k2).unwrap();
            assert_relative_eq!(phi, expected, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_trace_direction_is_unit_and_in_plane() {
        let rpm = Matrix3::identity();
        let d = trace_direction(&rpm, &v(1.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(d.norm(), 1.0, epsilon = 1e-15);
        // Perpendicular to the in-plane normal
        assert_relative_eq!(d.x + d.y, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_plane_without_trace() {
        let err = angle_between_planes(&Matrix3::identity(), &v(0.0, 0.0, 1.0), &v(1.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, TwinningError::UndefinedGeometry(_)));
    }

    #[test]
    fn test_zero_plane_and_singular_frame() {
        assert_eq!(
            angle_between_planes(&Matrix3::identity(), &v(1.0, 0.0, 0.0), &Vector3::zeros()),
            Err(TwinningError::DegenerateVector { name: "plane k2" })
        );
        assert!(matches!(
            angle_between_planes(&Matrix3::zeros(), &v(1.0, 0.0, 0.0), &v(0.0, 1.0, 0.0)),
            Err(TwinningError::SingularMatrix { .. })
        ));
    }
}
