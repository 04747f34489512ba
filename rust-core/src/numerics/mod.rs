// Numerics module: Floating point cleanup, checked linear algebra and rotation matrices
// Leaf dependencies of the geometry and twinning modules

// ======================== MODULE DECLARATIONS ========================
pub mod linalg;
pub mod rotation;
pub mod threshold;


// ======================== THRESHOLDING ========================
pub use threshold::{
    Threshold,               // trait - zeroes entries with |e| < t (copying or in place)
    apply_threshold,         // fn<T: Threshold>(p: T, t: f64) -> T - returns a cleaned copy
    apply_threshold_default, // fn<T: Threshold>(p: T) -> T - same with t = DEFAULT_THRESHOLD
};

// ======================== CHECKED LINEAR ALGEBRA ========================
pub use linalg::{
    checked_inverse, // fn(m: &Matrix3<f64>, name: &'static str) -> Result<Matrix3<f64>> - inverse or SingularMatrix
    dyadic,          // fn(l: &Vector3<f64>, m: &Vector3<f64>) -> Matrix3<f64> - outer product l ⊗ m
    is_singular,     // fn(m: &Matrix3<f64>, determinant: f64) -> bool - |det m| <= tol * |m|^3
    unit_vector,     // fn(v: &Vector3<f64>, name: &'static str) -> Result<Vector3<f64>> - normalized or DegenerateVector
};

// ======================== ROTATIONS ========================
pub use rotation::{
    axis_angle,              // fn(m: &Matrix3<f64>, tol: f64) -> Option<(Vector3<f64>, f64)> - axis and angle of a proper rotation
    is_proper_rotation,      // fn(m: &Matrix3<f64>, tol: f64) -> bool - RᵗR = I and det R = +1
    rotation_matrix,         // fn(axis: &Vector3<f64>, theta: f64) -> Result<Matrix3<f64>> - Rodrigues, radians
    rotation_matrix_degrees, // fn(axis: &Vector3<f64>, degrees: f64) -> Result<Matrix3<f64>> - Rodrigues, degrees
};
