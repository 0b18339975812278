use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::path::Path;

/// Lossless RGBA PNG.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        let pixel_rect = buffer.pixel_rect();

        if pixel_rect.is_empty() {
            return Err(ExportError::EmptyImage {
                width: pixel_rect.width(),
                height: pixel_rect.height(),
            });
        }

        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            pixel_rect.width(),
            pixel_rect.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;

        Ok(())
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("escape_time_{}_{}.png", name, std::process::id()))
    }

    #[test]
    fn png_round_trips_pixels() {
        let mut buffer = PixelBuffer::new(PixelRect::new(3, 2));
        let colour = Colour {
            r: 200,
            g: 100,
            b: 50,
            a: 255,
        };
        buffer.set_pixel(Point { x: 2, y: 1 }, colour).unwrap();

        let path = temp_path("round_trip");
        PngFilePresenter::new().present(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1).0, [200, 100, 50, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn empty_buffer_is_rejected() {
        let buffer = PixelBuffer::new(PixelRect::new(0, 4));

        let result = PngFilePresenter::new().present(&buffer, &temp_path("empty"));

        assert!(matches!(
            result,
            Err(ExportError::EmptyImage {
                width: 0,
                height: 4
            })
        ));
    }
}
