use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

/// Escape radius squared. Mandelbrot keeps iterating while `|z|² <= 4`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, point: Complex) -> u32 {
        let (x0, y0) = (point.real, point.imag);
        let (mut x, mut y) = (0.0_f64, 0.0_f64);
        let (mut xs, mut ys) = (0.0_f64, 0.0_f64);
        let mut iteration = 0;

        // Squares are carried between steps so the escape test reuses them.
        while xs + ys <= ESCAPE_RADIUS_SQUARED && iteration < self.max_iterations {
            let xt = xs - ys + x0;
            y = 2.0 * x * y + y0;
            x = xt;
            xs = x * x;
            ys = y * y;
            iteration += 1;
        }

        iteration
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 50, 1000] {
            let algorithm = MandelbrotAlgorithm::new(max_iterations);

            assert_eq!(algorithm.compute(Complex::new(0.0, 0.0)), max_iterations);
        }
    }

    #[test]
    fn test_points_past_two_escape_immediately() {
        let algorithm = MandelbrotAlgorithm::new(50);

        assert!(algorithm.compute(Complex::new(2.0001, 0.0)) <= 1);
        assert!(algorithm.compute(Complex::new(0.0, 2.5)) <= 1);
        assert!(algorithm.compute(Complex::new(-3.0, 1.0)) <= 1);
    }

    #[test]
    fn test_two_sits_on_inclusive_boundary() {
        // z1 = 2 has |z|² == 4, which still iterates once more before escaping.
        let algorithm = MandelbrotAlgorithm::new(50);

        assert_eq!(algorithm.compute(Complex::new(2.0, 0.0)), 2);
        assert_eq!(MandelbrotAlgorithm::new(1).compute(Complex::new(2.0, 0.0)), 1);
    }

    #[test]
    fn test_zero_max_iterations_returns_zero() {
        let algorithm = MandelbrotAlgorithm::new(0);

        assert_eq!(algorithm.compute(Complex::new(0.0, 0.0)), 0);
        assert_eq!(algorithm.compute(Complex::new(5.0, 5.0)), 0);
    }

    #[test]
    fn test_boundary_radius_is_inclusive() {
        // c = -2 lands on |z|² == 4 and stays there: z goes 0, -2, 2, 2, ...
        let algorithm = MandelbrotAlgorithm::new(20);

        assert_eq!(algorithm.compute(Complex::new(-2.0, 0.0)), 20);
    }

    #[test]
    fn test_iterations_non_increasing_away_from_set_on_real_axis() {
        let algorithm = MandelbrotAlgorithm::new(200);

        // Right of the cusp at 0.25.
        let right: Vec<u32> = (0..=100)
            .map(|i| 0.26 + f64::from(i) * 0.0024)
            .map(|x| algorithm.compute(Complex::new(x, 0.0)))
            .collect();
        assert!(right.windows(2).all(|pair| pair[0] >= pair[1]), "{right:?}");

        // Left of the tip at -2.
        let left: Vec<u32> = (0..=100)
            .map(|i| -2.0001 - f64::from(i) * 0.01)
            .map(|x| algorithm.compute(Complex::new(x, 0.0)))
            .collect();
        assert!(left.windows(2).all(|pair| pair[0] >= pair[1]), "{left:?}");
    }

    #[test]
    fn test_points_in_main_cardioid_reach_max() {
        let algorithm = MandelbrotAlgorithm::new(100);

        assert_eq!(algorithm.compute(Complex::new(-0.5, 0.0)), 100);
        assert_eq!(algorithm.compute(Complex::new(-1.0, 0.0)), 100);
        assert_eq!(algorithm.compute(Complex::new(0.2, 0.1)), 100);
    }
}
