use serde::{Deserialize, Serialize};
use std::ops::Add;

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Raises `self` to a real power in polar form: `|z|^n · e^(i·n·arg z)`.
    ///
    /// Non-integer and negative exponents fall out of the polar form directly.
    /// `0^n` for negative `n` yields non-finite parts, which escape on the next test.
    #[must_use]
    pub fn powf(self, exponent: f64) -> Self {
        let radius = self.magnitude_squared().powf(exponent / 2.0);
        let angle = exponent * self.imag.atan2(self.real);

        Self {
            real: radius * angle.cos(),
            imag: radius * angle.sin(),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Complex, expected: Complex) {
        assert!(
            (actual.real - expected.real).abs() < 1e-12
                && (actual.imag - expected.imag).abs() < 1e-12,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_real_and_imag() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);
        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_powf_two_matches_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let result = Complex::new(2.0, 3.0).powf(2.0);
        assert_close(result, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_powf_three_matches_cube() {
        // (1 + i)³ = -2 + 2i
        let result = Complex::new(1.0, 1.0).powf(3.0);
        assert_close(result, Complex::new(-2.0, 2.0));
    }

    #[test]
    fn test_powf_negative_exponent_inverts() {
        // 1 / (0 + 2i) = -0.5i
        let result = Complex::new(0.0, 2.0).powf(-1.0);
        assert_close(result, Complex::new(0.0, -0.5));
    }

    #[test]
    fn test_powf_fractional_exponent() {
        // sqrt(-4) on the principal branch = 2i
        let result = Complex::new(-4.0, 0.0).powf(0.5);
        assert_close(result, Complex::new(0.0, 2.0));
    }

    #[test]
    fn test_powf_zero_exponent_is_one() {
        let result = Complex::new(5.0, -3.0).powf(0.0);
        assert_close(result, Complex::new(1.0, 0.0));
    }
}
