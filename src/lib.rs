//! Escape-time fractal explorer: Mandelbrot and Julia renderers, a greyscale contrast and
//! brightness colouring, and the pan/zoom interaction model behind the interactive viewer.

pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

use tracing_subscriber::EnvFilter;

pub use crate::config::{ConfigError, ExplorerConfig};
pub use crate::controllers::export::ExportController;
pub use crate::controllers::interactive::InteractiveController;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::interaction::InteractionController;
pub use crate::presenters::file::ImageFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;

/// Installs the fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
