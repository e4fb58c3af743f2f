//! Error types for the API

use crate::error::ValidationError;
use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// The profile cannot be tokenized for the selected style
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown style code
    #[error("Invalid style: {0}")]
    InvalidStyle(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
