use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

/// Escape radius squared. Julia iterates only while `|z|² < 4`, strictly.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn compute(&self, point: Complex) -> u32 {
        let (cx, cy) = (self.constant.real, self.constant.imag);
        let (mut zx, mut zy) = (point.real, point.imag);
        let (mut zxs, mut zys) = (zx * zx, zy * zy);
        let mut iteration = 0;

        while zxs + zys < ESCAPE_RADIUS_SQUARED && iteration < self.max_iterations {
            let xt = zxs - zys + cx;
            zy = 2.0 * zx * zy + cy;
            zx = xt;
            iteration += 1;

            zxs = zx * zx;
            zys = zy * zy;
        }

        iteration
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(constant: Complex, max_iterations: u32) -> Self {
        Self {
            constant,
            max_iterations,
        }
    }
}
