use thiserror::Error;

/// Construction-time errors. `step` and `rebuild` are total and never fail
/// for a validly constructed grid or buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}
