//! Orientation relationships of non-conventional mechanical twins
//!
//! This library computes the orientation relationship (OR) between a parent crystal and its
//! twin from the twin plane K1, the shear direction η1, the transformation matrix rPm
//! (crystal frame → reference frame) and the lattice parameter, together with the
//! small set of geometric helpers such an analysis needs: rotation matrices, angles
//! between plane traces and floating point cleanup.
//!
//! Quick reference
//! - OR: [`twinning::or_nc_twins`], [`twinning::TwinSystem`]
//! - Rotations: [`numerics::rotation_matrix`]
//! - Plane traces: [`geometry::angle_between_planes`]
//! - Cleanup: [`numerics::apply_threshold`]
//! - Plot data: [`geometry::lattice_vectors_ab`]

pub mod config;
pub mod errors;
pub mod geometry;
pub mod interfaces;
pub mod numerics;
pub mod twinning;

pub use errors::{Result, TwinningError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A convenience prelude for importing common items.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::errors::{Result, TwinningError};
    #[doc(no_inline)]
    pub use crate::geometry::{FrameTransform, angle_between_planes, lattice_vectors_ab};
    #[doc(no_inline)]
    pub use crate::interfaces::{Frame, VectorKind};
    #[doc(no_inline)]
    pub use crate::numerics::{Threshold, apply_threshold, apply_threshold_default, rotation_matrix};
    #[doc(no_inline)]
    pub use crate::twinning::{NormalSense, TwinSystem, or_nc_twins};
}
