use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_request};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;

/// Renders a single frame and hands it to a file presenter.
pub struct ExportController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> ExportController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, request: &RenderRequest) -> Result<(), RenderFrameError> {
        info!(
            fractal = %request.fractal.kind(),
            width = request.pixel_rect.width(),
            height = request.pixel_rect.height(),
            max_iterations = request.fractal.max_iterations(),
            "rendering"
        );

        let start = Instant::now();
        let buffer = render_request(request, &NeverCancel)?;

        info!(duration = ?start.elapsed(), "render complete");

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), ExportError> {
        let filepath = filepath.as_ref();
        let buffer = self.buffer.as_ref().ok_or(ExportError::NothingRendered)?;

        self.presenter.present(buffer, filepath)?;
        info!(path = %filepath.display(), "saved");

        Ok(())
    }
}
