use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use thiserror::Error;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27015);
pub const DEFAULT_EXPONENT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FractalParamsError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("exponent must be finite, got {0}")]
    NonFiniteExponent(f64),
    #[error("julia constant must be finite, got {real} + {imag}i")]
    NonFiniteJuliaConstant { real: f64, imag: f64 },
}

/// Parameters read by the evaluators. Every instance has been validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    kind: FractalKinds,
    max_iterations: u32,
    julia_constant: Complex,
    exponent: f64,
}

impl FractalParams {
    pub fn new(
        kind: FractalKinds,
        max_iterations: u32,
        julia_constant: Complex,
        exponent: f64,
    ) -> Result<Self, FractalParamsError> {
        let mut params = Self::default();

        params.kind = kind;
        params.set_max_iterations(max_iterations)?;
        params.set_julia_constant(julia_constant)?;
        params.set_exponent(exponent)?;

        Ok(params)
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        self.kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn set_kind(&mut self, kind: FractalKinds) {
        self.kind = kind;
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    pub fn set_julia_constant(&mut self, constant: Complex) -> Result<(), FractalParamsError> {
        if !(constant.real.is_finite() && constant.imag.is_finite()) {
            return Err(FractalParamsError::NonFiniteJuliaConstant {
                real: constant.real,
                imag: constant.imag,
            });
        }

        self.julia_constant = constant;
        Ok(())
    }

    pub fn set_exponent(&mut self, exponent: f64) -> Result<(), FractalParamsError> {
        if !exponent.is_finite() {
            return Err(FractalParamsError::NonFiniteExponent(exponent));
        }

        self.exponent = exponent;
        Ok(())
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            kind: FractalKinds::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            julia_constant: DEFAULT_JULIA_CONSTANT,
            exponent: DEFAULT_EXPONENT,
        }
    }
}
