use crate::core::data::complex::Complex;

/// The fixed window of the complex plane shown at zoom 1.
///
/// `[-2.5, 1] x [-1, 1]`: 3.5 wide, 2 tall, biased left so the main cardioid sits
/// right of centre.
pub const PLANE_WINDOW: ComplexRect = ComplexRect {
    top_left: Complex::new(-2.5, -1.0),
    bottom_right: Complex::new(1.0, 1.0),
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    /// Distance from the left edge to the imaginary axis.
    #[must_use]
    pub fn left_bias(&self) -> f64 {
        -self.top_left.real
    }

    /// Distance from the top edge to the real axis.
    #[must_use]
    pub fn top_bias(&self) -> f64 {
        -self.top_left.imag
    }
}

impl Default for ComplexRect {
    fn default() -> Self {
        PLANE_WINDOW
    }
}
