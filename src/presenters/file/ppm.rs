use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (`P6`). Alpha is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;

        for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
            file.write_all(&pixel[..3])?;
        }

        file.flush()?;

        Ok(())
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
