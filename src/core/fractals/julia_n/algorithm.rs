use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Julia set of `z^n + c` for a real exponent `n`, raised in polar form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaNAlgorithm {
    constant: Complex,
    exponent: f64,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaNAlgorithm {
    fn compute(&self, point: Complex) -> u32 {
        let mut z = point;
        let mut iteration = 0;

        while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iteration < self.max_iterations {
            z = z.powf(self.exponent) + self.constant;
            iteration += 1;
        }

        iteration
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl JuliaNAlgorithm {
    #[must_use]
    pub fn new(constant: Complex, exponent: f64, max_iterations: u32) -> Self {
        Self {
            constant,
            exponent,
            max_iterations,
        }
    }
}
