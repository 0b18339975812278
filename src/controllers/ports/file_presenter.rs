use std::path::Path;

use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing has been rendered yet")]
    NothingRendered,
    #[error("cannot export an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError>;
}
