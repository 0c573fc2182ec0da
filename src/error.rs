use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// Non-positive sizes, out-of-grid coordinates and unparsable values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PercolationError>;
