// Constants

// Thresholds
pub const DEFAULT_THRESHOLD: f64 = 1e-9; // Cleanup of floating point noise in outputs

// Tolerances
pub const SINGULARITY_TOLERANCE: f64 = 1e-12; // |det m| <= tol * |m|^3 counts as singular
pub const NORM_TOLERANCE: f64 = 1e-12; // For normalization of axes, plane normals and directions
pub const RADICAND_TOLERANCE: f64 = 1e-12; // Shear radicands within tol of zero are rounding noise
pub const SLOPE_TOLERANCE: f64 = 1e-12; // Vertical trace lines and perpendicular pairs
