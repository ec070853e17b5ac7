//! Helper functions for creating specific error types

use super::types::GatewayError;

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn payload_too_large<S: Into<String>>(message: S) -> Self {
        Self::PayloadTooLarge(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error was caused by the client's request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GatewayError::Validation(_)
                | GatewayError::BadRequest(_)
                | GatewayError::PayloadTooLarge(_)
                | GatewayError::NotFound(_)
        )
    }
}
