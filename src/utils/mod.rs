//! Utility modules for the MSR backend
//!
//! - **error**: Error type and HTTP error responses
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
