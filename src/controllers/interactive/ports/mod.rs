//! Port definitions for the interactive controller.

pub mod presenter_port;
