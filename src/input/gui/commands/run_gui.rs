use std::marker::PhantomData;

use anyhow::Context as _;
use tracing::info;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

use crate::config::ExplorerConfig;
use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> anyhow::Result<()> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .context("create event loop")?;

        let event_loop_proxy = event_loop.create_proxy();

        // pixels needs the window for 'static
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Escape-time Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .context("create window")?,
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, event_loop_proxy)
            .context("create pixels surface")?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let app = GuiApp::new(window, &event_loop, presenter, controller, &self.config)?;

        info!(fractal = %self.config.fractal, "explorer window open");

        app.run(event_loop).context("event loop")?;

        Ok(())
    }
}
