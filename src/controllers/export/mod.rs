mod controller;
mod job;

pub use controller::ExportController;
pub use job::{ExportJob, ExportJobError};
