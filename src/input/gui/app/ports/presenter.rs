use std::sync::Arc;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::InteractiveControllerPresenterPort;
use crate::input::gui::events::GuiEvent;

/// Status of the most recent frame the presenter accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresenterStatus {
    pub last_presented_generation: u64,
    pub last_render_duration: Option<std::time::Duration>,
    pub last_error_message: Option<String>,
}

pub trait GuiPresenterPort: Sized {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error>;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    fn status(&self) -> &PresenterStatus;
}
