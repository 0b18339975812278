use std::sync::Arc;

use crate::config::{ConfigError, ExplorerConfig};
use crate::core::data::colour_params::ColourParams;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport_transform::ViewportTransform;
use crate::core::util::pixel_to_complex_coords::{PlaneMapping, pixel_to_complex_coords};

/// What the panel edits and what the next frame is rendered from.
pub struct GuiAppState {
    pub fractal: FractalParams,
    pub colour: ColourParams,
    /// Transform the next frame is rendered at. During a drag this is the proposed,
    /// uncommitted view.
    pub view: ViewportTransform,
    /// Plane coordinate under the cursor, if it is over the window.
    pub cursor: Option<Complex>,
    pub status_message: Option<String>,
    last_submitted_request: Option<Arc<RenderRequest>>,
    pub latest_submitted_generation: u64,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self {
            fractal: FractalParams::default(),
            colour: ColourParams::default(),
            view: ViewportTransform::default(),
            cursor: None,
            status_message: None,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }
}

impl GuiAppState {
    pub fn from_config(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            fractal: config.fractal_params()?,
            colour: config.colour_params()?,
            view: config.initial_transform(),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn build_render_request(&self, surface: PixelRect) -> RenderRequest {
        RenderRequest::for_surface(self.view, surface, self.fractal, self.colour)
    }

    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last.as_ref() != request)
    }

    pub fn record_submission(&mut self, request: Arc<RenderRequest>, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    /// Updates [`Self::cursor`] from a position in surface pixels.
    pub fn track_cursor(&mut self, surface: PixelRect, x: f64, y: f64) {
        let mapping = PlaneMapping::new(surface, &self.view);
        let pixel = (x >= 0.0 && y >= 0.0).then(|| Point {
            x: x as u32,
            y: y as u32,
        });

        self.cursor = pixel.and_then(|pixel| pixel_to_complex_coords(pixel, &mapping).ok());
    }
}
