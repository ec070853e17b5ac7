//! Configuration management for the MSR backend
//!
//! Configuration comes from an optional YAML file, then environment
//! variable overrides, then command line flags.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate YAML configuration
    pub fn from_yaml(content: &str) -> Result<Self> {
        let app: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Default configuration with environment overrides
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::default().with_env()
    }

    /// Apply environment overrides and re-validate
    pub fn with_env(self) -> Result<Self> {
        let config = Self {
            app: self.app.apply_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get estimation configuration
    pub fn estimation(&self) -> &EstimationConfig {
        &self.app.estimation
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        Validate::validate(&self.app).map_err(GatewayError::Config)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
