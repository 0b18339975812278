//! Background rendering for interactive exploration.
//!
//! The GUI submits [`RenderRequest`](crate::core::data::render_request::RenderRequest)s; a worker
//! thread renders the newest one and hands the finished frame to an
//! [`InteractiveControllerPresenterPort`]. Submitting a new request cancels the one in flight.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::InteractiveControllerPresenterPort;
