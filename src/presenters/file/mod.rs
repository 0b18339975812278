pub mod png;
pub mod ppm;

use std::path::Path;

use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use png::PngFilePresenter;
use ppm::PpmFilePresenter;

/// Chooses the encoder from the file extension: `.ppm` writes PPM, anything else PNG.
#[derive(Debug, Default)]
pub struct ImageFilePresenter {}

impl ImageFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for ImageFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        let is_ppm = filepath
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            PpmFilePresenter::new().present(buffer, filepath)
        } else {
            PngFilePresenter::new().present(buffer, filepath)
        }
    }
}
