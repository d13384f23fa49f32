use crate::core::data::complex::Complex;
use std::num::NonZeroU32;

/// An escape-time iteration evaluated at a single point of the plane.
///
/// Implementations must be pure: the same point always gives the same count,
/// and the count never exceeds [`max_iterations`](Self::max_iterations).
pub trait FractalAlgorithm {
    fn compute(&self, point: Complex) -> u32;

    fn max_iterations(&self) -> NonZeroU32;
}
