pub mod clock;
pub mod controller;
pub mod debounce;
pub mod limits;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{InteractionController, ViewUpdate};
pub use limits::InteractionLimits;
pub use session::{InteractionSession, InteractionState};
