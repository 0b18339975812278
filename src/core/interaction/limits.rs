use std::time::Duration;

/// Tuning for pointer-driven navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionLimits {
    /// Fraction of the current zoom added or removed per wheel notch.
    pub zoom_step: f64,
    pub zoom_speed: f64,
    /// Resolution scale used while the view is moving.
    pub motion_resolution_scale: f64,
    /// Quiet time after the last motion before the interaction counts as ended.
    pub settle_delay: Duration,
}

impl InteractionLimits {
    /// Sets the zoom speed multiplier. Negative and non-finite values fall back to 0.
    pub fn set_zoom_speed(&mut self, zoom_speed: f64) {
        self.zoom_speed = if zoom_speed.is_finite() {
            zoom_speed.max(0.0)
        } else {
            0.0
        };
    }
}

impl Default for InteractionLimits {
    fn default() -> Self {
        Self {
            zoom_step: 0.03,
            zoom_speed: 1.0,
            motion_resolution_scale: 0.1,
            settle_delay: Duration::from_millis(500),
        }
    }
}
