use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport_transform::ViewportTransform;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    /// The transform the frame was rendered at, including its resolution scale.
    pub transform: ViewportTransform,
    pub render_duration: Duration,
}
