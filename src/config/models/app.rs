//! Top-level application configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Application configuration as read from the YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Mock data used by the estimates
    #[serde(default)]
    pub estimation: EstimationConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
