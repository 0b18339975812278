use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("colour step needs maximum iterations greater than zero")]
    ZeroMaxIterations,
}
