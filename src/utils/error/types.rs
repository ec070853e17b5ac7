//! Error types for the MSR backend

use thiserror::Error;

/// Result type alias for the MSR backend
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the MSR backend
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Request payload failed schema or range validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body exceeds the configured limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
