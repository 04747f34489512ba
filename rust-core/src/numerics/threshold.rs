//! Cleanup of floating point noise.
//!
//! Every entry whose magnitude is strictly below the threshold becomes exactly `0.0`;
//! everything else, NaN included, passes through untouched. The free functions
//! return a cleaned copy and never touch caller-owned data. Use
//! [`Threshold::threshold_in_place`] when mutation is what you want.

use nalgebra::SMatrix;

use crate::config::DEFAULT_THRESHOLD;

/// Values that can have their near-zero entries snapped to zero.
pub trait Threshold: Sized {
    /// Zero every entry with `|e| < t`, mutating `self`.
    fn threshold_in_place(&mut self, t: f64);

    /// Consume `self` and return the cleaned value.
    fn thresholded(mut self, t: f64) -> Self {
        self.threshold_in_place(t);
        self
    }
}

impl Threshold for f64 {
    fn threshold_in_place(&mut self, t: f64) {
        if self.abs() < t {
            *self = 0.0;
        }
    }
}

impl<const R: usize, const C: usize> Threshold for SMatrix<f64, R, C> {
    fn threshold_in_place(&mut self, t: f64) {
        self.iter_mut().for_each(|e| e.threshold_in_place(t));
    }
}

impl<T: Threshold, const N: usize> Threshold for [T; N] {
    fn threshold_in_place(&mut self, t: f64) {
        self.iter_mut().for_each(|e| e.threshold_in_place(t));
    }
}

impl<T: Threshold> Threshold for Vec<T> {
    fn threshold_in_place(&mut self, t: f64) {
        self.iter_mut().for_each(|e| e.threshold_in_place(t));
    }
}

/// Return `p` with every entry below `t` in magnitude replaced by `0.0`.
pub fn apply_threshold<T: Threshold>(p: T, t: f64) -> T {
    p.thresholded(t)
}

/// [`apply_threshold`] with `t = DEFAULT_THRESHOLD` (1e-9).
pub fn apply_threshold_default<T: Threshold>(p: T) -> T {
    p.thresholded(DEFAULT_THRESHOLD)
}
