use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::colour_params::{ColourParams, ColourParamsError};
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::{
    DEFAULT_EXPONENT, DEFAULT_JULIA_CONSTANT, DEFAULT_MAX_ITERATIONS, FractalParams,
    FractalParamsError,
};
use crate::core::data::viewport_transform::{
    DEFAULT_OFFSET, DEFAULT_RESOLUTION_SCALE, DEFAULT_ZOOM, MAX_RESOLUTION_SCALE,
    MIN_RESOLUTION_SCALE, ViewportTransform,
};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::interaction::limits::InteractionLimits;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("resolution must be within [0.01, 1], got {0}")]
    ResolutionOutOfRange(f64),
    #[error("zoom speed must be finite and non-negative, got {0}")]
    InvalidZoomSpeed(f64),
    #[error(transparent)]
    Fractal(#[from] FractalParamsError),
    #[error(transparent)]
    Colour(#[from] ColourParamsError),
}

/// Everything a user can set, as loaded from JSON. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub resolution: f64,
    pub max_iterations: u32,
    pub motion_blur: bool,
    pub fractal: FractalKinds,
    pub exponent: f64,
    /// `[real, imag]`
    pub julia_constant: [f64; 2],
    pub contrast: f64,
    pub brightness: f64,
    pub zoom_speed: f64,
    pub zoom: f64,
    pub offset: [f64; 2],
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            motion_blur: true,
            fractal: FractalKinds::default(),
            exponent: DEFAULT_EXPONENT,
            julia_constant: [DEFAULT_JULIA_CONSTANT.real, DEFAULT_JULIA_CONSTANT.imag],
            contrast: 0.0,
            brightness: 0.0,
            zoom_speed: 1.0,
            zoom: DEFAULT_ZOOM,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl ExplorerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_RESOLUTION_SCALE..=MAX_RESOLUTION_SCALE).contains(&self.resolution) {
            return Err(ConfigError::ResolutionOutOfRange(self.resolution));
        }

        if !self.zoom_speed.is_finite() || self.zoom_speed < 0.0 {
            return Err(ConfigError::InvalidZoomSpeed(self.zoom_speed));
        }

        self.fractal_params()?;
        self.colour_params()?;

        Ok(())
    }

    pub fn fractal_params(&self) -> Result<FractalParams, FractalParamsError> {
        let [real, imag] = self.julia_constant;

        FractalParams::new(
            self.fractal,
            self.max_iterations,
            Complex::new(real, imag),
            self.exponent,
        )
    }

    pub fn colour_params(&self) -> Result<ColourParams, ColourParamsError> {
        ColourParams::new(self.contrast, self.brightness)
    }

    #[must_use]
    pub fn initial_transform(&self) -> ViewportTransform {
        ViewportTransform::new(self.zoom, self.offset, self.resolution)
    }

    #[must_use]
    pub fn interaction_limits(&self) -> InteractionLimits {
        let mut limits = InteractionLimits::default();
        limits.set_zoom_speed(self.zoom_speed);
        limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = ExplorerConfig::from_json_str("{}").unwrap();

        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.fractal_params().unwrap(), FractalParams::default());
        assert_eq!(config.colour_params().unwrap(), ColourParams::default());
        assert_eq!(config.initial_transform(), ViewportTransform::default());
    }

    #[test]
    fn test_partial_json_overrides_named_keys() {
        let config = ExplorerConfig::from_json_str(
            r#"{ "fractal": "julia_n", "exponent": 3.5, "julia_constant": [0.1, -0.2], "motion_blur": false }"#,
        )
        .unwrap();
        let params = config.fractal_params().unwrap();

        assert_eq!(params.kind(), FractalKinds::JuliaN);
        assert_eq!(params.exponent(), 3.5);
        assert_eq!(params.julia_constant(), Complex::new(0.1, -0.2));
        assert!(!config.motion_blur);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = ExplorerConfig::from_json_str(r#"{ "colour_scheme": "fire" }"#);

        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert!(matches!(
            ExplorerConfig::from_json_str(r#"{ "resolution": 0.0 }"#),
            Err(ConfigError::ResolutionOutOfRange(_))
        ));
        assert!(matches!(
            ExplorerConfig::from_json_str(r#"{ "max_iterations": 0 }"#),
            Err(ConfigError::Fractal(FractalParamsError::ZeroMaxIterations))
        ));
        assert!(matches!(
            ExplorerConfig::from_json_str(r#"{ "contrast": 300 }"#),
            Err(ConfigError::Colour(ColourParamsError::ContrastOutOfRange(_)))
        ));
        assert!(matches!(
            ExplorerConfig::from_json_str(r#"{ "zoom_speed": -1 }"#),
            Err(ConfigError::InvalidZoomSpeed(_))
        ));
    }

    #[test]
    fn test_zoom_speed_reaches_interaction_limits() {
        let config = ExplorerConfig::from_json_str(r#"{ "zoom_speed": 2.5 }"#).unwrap();

        assert_eq!(config.interaction_limits().zoom_speed, 2.5);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let error = ExplorerConfig::from_json_file("/nonexistent/explorer.json").unwrap_err();

        assert!(error.to_string().contains("/nonexistent/explorer.json"));
    }
}
