//! Configuration data models
//!
//! This module defines all configuration structures used by the backend.

#![allow(missing_docs)]

pub mod app;
pub mod estimation;
pub mod logging;
pub mod server;

// Re-export all configuration types
pub use app::*;
pub use estimation::*;
pub use logging::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024 // 256KB
}

/// Default log filter
pub fn default_log_level() -> String {
    "info".to_string()
}
