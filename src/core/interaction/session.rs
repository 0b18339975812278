#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    Zooming,
    Settling,
}

/// State of one drag, from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    pub down_position: [f64; 2],
    pub base_offset: [f64; 2],
    pub last_position: [f64; 2],
}

impl InteractionSession {
    #[must_use]
    pub fn new(down_position: [f64; 2], base_offset: [f64; 2]) -> Self {
        Self {
            down_position,
            base_offset,
            last_position: down_position,
        }
    }

    /// Offset for the pointer at `position`: `base + (down - position) * factor` on both axes.
    #[must_use]
    pub fn offset_at(&self, position: [f64; 2], factor: f64) -> [f64; 2] {
        [
            self.base_offset[0] + (self.down_position[0] - position[0]) * factor,
            self.base_offset[1] + (self.down_position[1] - position[1]) * factor,
        ]
    }
}
