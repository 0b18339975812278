pub mod colour_mapping;
pub mod evaluator;
pub mod fractal_kinds;
pub mod julia;
pub mod julia_n;
pub mod mandelbrot;
