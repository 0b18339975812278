use crate::core::data::point::Point;

/// Pixel dimensions of a frame anchored at the origin.
///
/// Zero-sized rects are valid: rendering into one is a no-op.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Dimensions after scaling both axes by `scale`, truncating towards zero.
    #[must_use]
    pub fn scaled(&self, scale: f64) -> Self {
        let scale_axis = |extent: u32| (f64::from(extent) * scale).floor().max(0.0) as u32;

        Self {
            width: scale_axis(self.width),
            height: scale_axis(self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(121, 101);

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
        assert!(!rect.is_empty());
    }

    #[test]
    fn test_zero_sized_rects_are_empty() {
        assert!(PixelRect::new(0, 10).is_empty());
        assert!(PixelRect::new(10, 0).is_empty());
        assert!(PixelRect::default().is_empty());
        assert_eq!(PixelRect::new(0, 10).size(), 0);
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(100, 50);

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: 99, y: 49 }));
        assert!(!rect.contains_point(Point { x: 100, y: 0 }));
        assert!(!rect.contains_point(Point { x: 0, y: 50 }));
    }

    #[test]
    fn test_scaled_truncates() {
        let rect = PixelRect::new(1920, 1080);

        assert_eq!(rect.scaled(1.0), rect);
        assert_eq!(rect.scaled(0.8), PixelRect::new(1536, 864));
        assert_eq!(rect.scaled(0.1), PixelRect::new(192, 108));
        assert_eq!(PixelRect::new(5, 5).scaled(0.1), PixelRect::new(0, 0));
    }
}
