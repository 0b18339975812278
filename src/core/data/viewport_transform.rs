use crate::core::data::pixel_rect::PixelRect;

/// Offset of the default view, in pixel-normalized units.
pub const DEFAULT_OFFSET: [f64; 2] = [0.55, 0.5];
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_RESOLUTION_SCALE: f64 = 0.8;
/// Smallest resolution scale a transform will hold.
pub const MIN_RESOLUTION_SCALE: f64 = 0.01;
pub const MAX_RESOLUTION_SCALE: f64 = 1.0;

/// Clamps a requested resolution scale into `(0, 1]`.
///
/// Non-finite and non-positive requests fall back to [`MIN_RESOLUTION_SCALE`].
#[must_use]
pub fn clamp_resolution_scale(scale: f64) -> f64 {
    if !scale.is_finite() || scale < MIN_RESOLUTION_SCALE {
        return MIN_RESOLUTION_SCALE;
    }

    scale.min(MAX_RESOLUTION_SCALE)
}

/// Zoom, offset and resolution state mapping device pixels onto the complex plane.
///
/// Invariants: `zoom >= 0` and `resolution_scale` in `(0, 1]`. Setters clamp rather than fail.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportTransform {
    zoom: f64,
    offset: [f64; 2],
    resolution_scale: f64,
}

impl ViewportTransform {
    #[must_use]
    pub fn new(zoom: f64, offset: [f64; 2], resolution_scale: f64) -> Self {
        let mut transform = Self {
            zoom: DEFAULT_ZOOM,
            offset,
            resolution_scale: DEFAULT_RESOLUTION_SCALE,
        };
        transform.set_zoom(zoom);
        transform.set_resolution_scale(resolution_scale);
        transform
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> [f64; 2] {
        self.offset
    }

    #[must_use]
    pub fn resolution_scale(&self) -> f64 {
        self.resolution_scale
    }

    /// Sets the zoom, clamping at a lower bound of 0. NaN collapses to 0.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.max(0.0);
    }

    pub fn set_offset(&mut self, offset: [f64; 2]) {
        self.offset = offset;
    }

    pub fn set_resolution_scale(&mut self, scale: f64) {
        self.resolution_scale = clamp_resolution_scale(scale);
    }

    #[must_use]
    pub fn with_offset(mut self, offset: [f64; 2]) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_resolution_scale(mut self, scale: f64) -> Self {
        self.set_resolution_scale(scale);
        self
    }

    /// Applies one wheel notch: `zoom += sign(delta) · step · speed · zoom`, clamped at 0.
    ///
    /// A zero delta leaves the zoom unchanged.
    pub fn apply_wheel(&mut self, delta: f64, step: f64, speed: f64) {
        let direction = if delta > 0.0 {
            1.0
        } else if delta < 0.0 {
            -1.0
        } else {
            0.0
        };

        self.set_zoom(self.zoom + direction * step * speed * self.zoom);
    }

    /// Frame dimensions for a surface of `surface` device pixels at the current resolution.
    #[must_use]
    pub fn render_dimensions(&self, surface: PixelRect) -> PixelRect {
        surface.scaled(self.resolution_scale)
    }

    /// Resets zoom and offset to the default view, keeping the resolution.
    pub fn reset_view(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.offset = DEFAULT_OFFSET;
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: DEFAULT_OFFSET,
            resolution_scale: DEFAULT_RESOLUTION_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transform_shows_canonical_view() {
        let transform = ViewportTransform::default();

        assert_eq!(transform.zoom(), 1.0);
        assert_eq!(transform.offset(), [0.55, 0.5]);
        assert_eq!(transform.resolution_scale(), 0.8);
    }

    #[test]
    fn zoom_is_clamped_at_zero() {
        let mut transform = ViewportTransform::default();

        transform.set_zoom(-3.0);
        assert_eq!(transform.zoom(), 0.0);

        transform.set_zoom(f64::NAN);
        assert_eq!(transform.zoom(), 0.0);
    }

    #[test]
    fn resolution_scale_is_clamped_into_unit_interval() {
        assert_eq!(clamp_resolution_scale(0.5), 0.5);
        assert_eq!(clamp_resolution_scale(1.5), 1.0);
        assert_eq!(clamp_resolution_scale(0.0), MIN_RESOLUTION_SCALE);
        assert_eq!(clamp_resolution_scale(-1.0), MIN_RESOLUTION_SCALE);
        assert_eq!(clamp_resolution_scale(f64::NAN), MIN_RESOLUTION_SCALE);

        let transform = ViewportTransform::new(1.0, DEFAULT_OFFSET, 7.0);
        assert_eq!(transform.resolution_scale(), 1.0);
    }

    #[test]
    fn wheel_scales_zoom_multiplicatively() {
        let mut transform = ViewportTransform::default();

        transform.apply_wheel(120.0, 0.03, 1.0);
        assert!((transform.zoom() - 1.03).abs() < 1e-12);

        transform.apply_wheel(-3.0, 0.03, 1.0);
        assert!((transform.zoom() - 1.03 * 0.97).abs() < 1e-12);
    }

    #[test]
    fn zero_wheel_delta_leaves_zoom() {
        let mut transform = ViewportTransform::default();

        transform.apply_wheel(0.0, 0.03, 1.0);

        assert_eq!(transform.zoom(), 1.0);
    }

    #[test]
    fn fast_zoom_in_clamps_at_zero() {
        let mut transform = ViewportTransform::default();

        transform.apply_wheel(-1.0, 0.03, 50.0);

        assert_eq!(transform.zoom(), 0.0);
    }

    #[test]
    fn render_dimensions_follow_resolution_scale() {
        let transform = ViewportTransform::default().with_resolution_scale(0.5);

        assert_eq!(
            transform.render_dimensions(PixelRect::new(800, 600)),
            PixelRect::new(400, 300)
        );
    }

    #[test]
    fn reset_view_keeps_resolution() {
        let mut transform = ViewportTransform::new(4.0, [0.1, 0.2], 0.3);

        transform.reset_view();

        assert_eq!(transform.zoom(), DEFAULT_ZOOM);
        assert_eq!(transform.offset(), DEFAULT_OFFSET);
        assert_eq!(transform.resolution_scale(), 0.3);
    }
}
