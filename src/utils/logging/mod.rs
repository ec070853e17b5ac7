//! Logging setup
//!
//! Installs the global tracing subscriber. `RUST_LOG` takes precedence over
//! the configured level when set.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{GatewayError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to the configured level
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            GatewayError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    result.map_err(|e| GatewayError::Internal(format!("Failed to initialize logging: {}", e)))
}
