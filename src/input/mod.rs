//! Input adapters for the explorer.
//!
//! Adapters receive input from a source and translate it into interaction and render requests.

#[cfg(feature = "gui")]
pub mod gui;
