use crate::core::data::complex::Complex;

/// An escape-time recurrence evaluated at one plane point.
pub trait FractalAlgorithm {
    /// Iterations survived before escaping, in `[0, max_iterations]`.
    fn compute(&self, point: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
