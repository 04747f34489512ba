// Definitions that are used throughout all modules
use serde::{Deserialize, Serialize};

// Enumeration for the coordinate frame a vector is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    /// Fixed lab/sample frame (R-frame)
    Reference,
    /// Frame aligned with the crystal lattice axes (m-frame)
    Crystal,
}

// Enumeration for how a vector transforms between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorKind {
    /// Covariant: row vector, right-multiplied by the inverse transformation
    PlaneNormal,
    /// Contravariant: column vector, left-multiplied by the transformation
    Direction,
}

impl Frame {
    pub fn other(self) -> Frame {
        match self {
            Frame::Reference => Frame::Crystal,
            Frame::Crystal => Frame::Reference,
        }
    }
}
