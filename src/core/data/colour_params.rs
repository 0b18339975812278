use thiserror::Error;

pub const MAX_CONTRAST: f64 = 255.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ColourParamsError {
    #[error("contrast must be within [-255, 255], got {0}")]
    ContrastOutOfRange(f64),
    #[error("brightness must be finite, got {0}")]
    NonFiniteBrightness(f64),
}

/// Contrast and brightness applied to the greyscale ramp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColourParams {
    contrast: f64,
    brightness: f64,
}

impl ColourParams {
    pub fn new(contrast: f64, brightness: f64) -> Result<Self, ColourParamsError> {
        if !(-MAX_CONTRAST..=MAX_CONTRAST).contains(&contrast) {
            return Err(ColourParamsError::ContrastOutOfRange(contrast));
        }

        if !brightness.is_finite() {
            return Err(ColourParamsError::NonFiniteBrightness(brightness));
        }

        Ok(Self {
            contrast,
            brightness,
        })
    }

    #[must_use]
    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    #[must_use]
    pub fn brightness(&self) -> f64 {
        self.brightness
    }
}
