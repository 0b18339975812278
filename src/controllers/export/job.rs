use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use thiserror::Error;

use crate::controllers::export::controller::ExportController;
use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::actions::render_frame::render_frame::RenderFrameError;
use crate::core::data::render_request::RenderRequest;

#[derive(Debug, Error)]
pub enum ExportJobError {
    #[error("render failed: {0}")]
    Render(#[from] RenderFrameError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("export thread panicked")]
    Panicked,
}

/// An export running on its own thread, so the caller's thread stays free for input.
pub struct ExportJob {
    path: PathBuf,
    handle: JoinHandle<Result<(), ExportJobError>>,
}

impl ExportJob {
    /// Renders `request` and writes it to `path` on a new thread. `on_done` runs on that thread
    /// once the file is written or the export has failed.
    pub fn spawn<P, F>(
        presenter: P,
        request: RenderRequest,
        path: PathBuf,
        on_done: F,
    ) -> std::io::Result<Self>
    where
        P: FilePresenterPort + Send + 'static,
        F: FnOnce() + Send + 'static,
    {
        let worker_path = path.clone();

        let handle = thread::Builder::new()
            .name("export".to_owned())
            .spawn(move || {
                let mut controller = ExportController::new(presenter);
                let result = controller
                    .generate(&request)
                    .map_err(ExportJobError::from)
                    .and_then(|()| controller.write(&worker_path).map_err(ExportJobError::from));

                on_done();
                result
            })?;

        Ok(Self { path, handle })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the export and returns its outcome.
    pub fn join(self) -> Result<(), ExportJobError> {
        self.handle.join().map_err(|_| ExportJobError::Panicked)?
    }
}
