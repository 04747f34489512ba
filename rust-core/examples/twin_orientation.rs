/// Example walking through an orientation-relationship analysis
///
/// A crystal whose b axis is 20% longer than a, imaged with the c axis along the
/// beam, twins on (110) with shear direction [1-10]. The example prints the shear,
/// the OR matrix, its misorientation, and the trace angle of the twin boundary
/// against (100).
use nalgebra::{Matrix3, Vector3};
use nc_twinning::geometry::{angle_between_planes, lattice_vectors_ab};
use nc_twinning::numerics::{apply_threshold_default, rotation_matrix_degrees};
use nc_twinning::twinning::{NormalSense, TwinSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Orientation relationship of a non-conventional twin ===\n");

    // Crystal frame -> reference frame, normalized by a; rotated 15° about the beam
    let cell = Matrix3::from_diagonal(&Vector3::new(1.0, 1.2, 1.0));
    let rpm = rotation_matrix_degrees(&Vector3::z(), 15.0)? * cell;
    let a = 3.2;

    let k1 = Vector3::new(1.0, 1.0, 0.0);
    let eta1 = Vector3::new(1.0, -1.0, 0.0);

    let twin = TwinSystem::nc_twin().analyze(&k1, &eta1, &rpm, a, NormalSense::Positive)?;

    println!("1. Shear magnitude s = {:.6}", twin.shear);
    println!("   rm = {:?}", twin.plane_normal.as_slice());
    println!("   rl = {:?}\n", twin.shear_direction.as_slice());

    println!("2. OR matrix rL (thresholded):");
    let rl = apply_threshold_default(twin.orientation);
    for row in rl.row_iter() {
        println!("   [{:>10.6} {:>10.6} {:>10.6}]", row[0], row[1], row[2]);
    }

    if let Some((axis, angle)) = twin.misorientation(1e-9) {
        println!(
            "\n3. Misorientation: {:.3}° about {:?}",
            angle.to_degrees(),
            axis.as_slice()
        );
    }

    let phi = angle_between_planes(&rpm, &k1, &Vector3::new(1.0, 0.0, 0.0))?;
    println!("\n4. Trace angle between (110) and (100): {phi:.3}°");

    let arrows = lattice_vectors_ab(&rpm);
    println!(
        "\n5. Lattice vectors in [x,y]: a = {:?}, b = {:?}, gamma = {:.3}°",
        arrows.a.as_slice(),
        arrows.b.as_slice(),
        arrows.gamma_degrees()?
    );

    Ok(())
}
