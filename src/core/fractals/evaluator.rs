use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::FractalParams;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia_n::algorithm::JuliaNAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// The closed set of recurrences the renderer dispatches over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluator {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
    JuliaN(JuliaNAlgorithm),
}

impl Evaluator {
    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Julia(_) => FractalKinds::Julia,
            Self::JuliaN(_) => FractalKinds::JuliaN,
        }
    }
}

impl FractalAlgorithm for Evaluator {
    #[inline]
    fn compute(&self, point: Complex) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.compute(point),
            Self::Julia(algorithm) => algorithm.compute(point),
            Self::JuliaN(algorithm) => algorithm.compute(point),
        }
    }

    fn max_iterations(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.max_iterations(),
            Self::Julia(algorithm) => algorithm.max_iterations(),
            Self::JuliaN(algorithm) => algorithm.max_iterations(),
        }
    }
}

impl From<&FractalParams> for Evaluator {
    fn from(params: &FractalParams) -> Self {
        evaluator_factory(params)
    }
}

#[must_use]
pub fn evaluator_factory(params: &FractalParams) -> Evaluator {
    let max_iterations = params.max_iterations();

    match params.kind() {
        FractalKinds::Mandelbrot => Evaluator::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)),
        FractalKinds::Julia => {
            Evaluator::Julia(JuliaAlgorithm::new(params.julia_constant(), max_iterations))
        }
        FractalKinds::JuliaN => Evaluator::JuliaN(JuliaNAlgorithm::new(
            params.julia_constant(),
            params.exponent(),
            max_iterations,
        )),
    }
}
