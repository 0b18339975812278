pub mod contrast_brightness;
pub mod errors;
