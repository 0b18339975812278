use crate::core::data::colour_params::ColourParams;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport_transform::ViewportTransform;

/// Everything a frame render reads, captured by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub transform: ViewportTransform,
    pub pixel_rect: PixelRect,
    pub fractal: FractalParams,
    pub colour: ColourParams,
}

impl RenderRequest {
    #[must_use]
    pub fn new(
        transform: ViewportTransform,
        pixel_rect: PixelRect,
        fractal: FractalParams,
        colour: ColourParams,
    ) -> Self {
        Self {
            transform,
            pixel_rect,
            fractal,
            colour,
        }
    }

    /// A request for a surface of `surface` device pixels at the transform's resolution scale.
    #[must_use]
    pub fn for_surface(
        transform: ViewportTransform,
        surface: PixelRect,
        fractal: FractalParams,
        colour: ColourParams,
    ) -> Self {
        Self::new(transform, transform.render_dimensions(surface), fractal, colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_surface_scales_target_dimensions() {
        let transform = ViewportTransform::default().with_resolution_scale(0.1);
        let request = RenderRequest::for_surface(
            transform,
            PixelRect::new(1000, 500),
            FractalParams::default(),
            ColourParams::default(),
        );

        assert_eq!(request.pixel_rect, PixelRect::new(100, 50));
        assert_eq!(request.transform, transform);
    }
}
