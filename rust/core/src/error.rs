use thiserror::Error;

/// Result type for room detection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running detection
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid detection settings: {0}")]
    InvalidSettings(String),
}
