pub mod render_error;
