use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::ColourSample;
use crate::core::data::colour_params::ColourParams;
use crate::core::fractals::colour_mapping::errors::ColourMapError;

/// Greyscale ramp from white (escaped at once) to black (never escaped), graded by
/// contrast and brightness.
///
/// Samples are not clamped; writing them into a pixel buffer saturates each channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastBrightnessMap {
    contrast_factor: f64,
    colour_step: f64,
    brightness: f64,
}

impl ContrastBrightnessMap {
    pub fn new(params: ColourParams, max_iterations: u32) -> Result<Self, ColourMapError> {
        if max_iterations == 0 {
            return Err(ColourMapError::ZeroMaxIterations);
        }

        let contrast = params.contrast();

        Ok(Self {
            contrast_factor: (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast)),
            colour_step: 255.0 / f64::from(max_iterations),
            brightness: params.brightness(),
        })
    }
}

impl ColourMap for ContrastBrightnessMap {
    #[inline]
    fn map(&self, iterations: u32) -> ColourSample {
        let ramp = 255.0 - f64::from(iterations) * self.colour_step;
        let value = self.contrast_factor * (ramp - 128.0) + 128.0 + self.brightness;

        ColourSample::grey(value)
    }

    fn display_name(&self) -> &str {
        "Greyscale (contrast/brightness)"
    }
}
