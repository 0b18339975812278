use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives completed frames from the render worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
