use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, PLANE_WINDOW};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport_transform::ViewportTransform;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error("point {point:?} is outside {pixel_rect:?}")]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Maps one pixel axis onto the plane.
///
/// `(((p / extent) * plane_extent - plane_bias) * zoom) + offset * plane_extent - plane_bias`
#[inline]
#[must_use]
pub fn axis_coordinate(
    p: f64,
    offset: f64,
    extent: f64,
    plane_extent: f64,
    plane_bias: f64,
    zoom: f64,
) -> f64 {
    ((((p / extent) * plane_extent) - plane_bias) * zoom) + (offset * plane_extent) - plane_bias
}

/// Pixel to plane conversion for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    pixel_rect: PixelRect,
    window: ComplexRect,
    zoom: f64,
    offset: [f64; 2],
}

impl PlaneMapping {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, transform: &ViewportTransform) -> Self {
        Self {
            pixel_rect,
            window: PLANE_WINDOW,
            zoom: transform.zoom(),
            offset: transform.offset(),
        }
    }

    #[inline]
    #[must_use]
    pub fn real(&self, x: u32) -> f64 {
        axis_coordinate(
            f64::from(x),
            self.offset[0],
            f64::from(self.pixel_rect.width()),
            self.window.width(),
            self.window.left_bias(),
            self.zoom,
        )
    }

    #[inline]
    #[must_use]
    pub fn imag(&self, y: u32) -> f64 {
        axis_coordinate(
            f64::from(y),
            self.offset[1],
            f64::from(self.pixel_rect.height()),
            self.window.height(),
            self.window.top_bias(),
            self.zoom,
        )
    }
}

/// Plane coordinate of a pixel, or an error if it lies outside the mapped frame.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    mapping: &PlaneMapping,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !mapping.pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect: mapping.pixel_rect,
        });
    }

    Ok(Complex::new(
        mapping.real(pixel_position.x),
        mapping.imag(pixel_position.y),
    ))
}
