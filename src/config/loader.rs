//! Environment overrides
//!
//! Environment variables are applied on top of the file (or default)
//! configuration.

use super::models::*;
use crate::services::pricing::FuelNetwork;
use crate::utils::error::{GatewayError, Result};
use std::env;
use tracing::debug;

/// Listen host
pub const ENV_HOST: &str = "MSR_HOST";
/// Listen port
pub const ENV_PORT: &str = "MSR_PORT";
/// Worker thread count
pub const ENV_WORKERS: &str = "MSR_WORKERS";
/// Comma-separated CORS origin allow-list
pub const ENV_CORS_ORIGINS: &str = "CORS_ALLOW_ORIGINS";
/// Log filter directives
pub const ENV_LOG_LEVEL: &str = "MSR_LOG_LEVEL";
/// `text` or `json`
pub const ENV_LOG_FORMAT: &str = "MSR_LOG_FORMAT";
/// Comma-separated fallback fuel networks
pub const ENV_FALLBACK_NETWORKS: &str = "MSR_FALLBACK_NETWORKS";

impl AppConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", ENV_PORT, e)))?;
        }
        if let Some(workers) = lookup(ENV_WORKERS) {
            self.server.workers = Some(workers.trim().parse().map_err(|e| {
                GatewayError::Config(format!("Invalid {}: {}", ENV_WORKERS, e))
            })?);
        }
        if let Some(origins) = lookup(ENV_CORS_ORIGINS) {
            self.server.cors.allowed_origins = CorsConfig::parse_origins(&origins);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format.parse().map_err(GatewayError::Config)?;
        }
        if let Some(networks) = lookup(ENV_FALLBACK_NETWORKS) {
            self.estimation.fallback_networks = parse_networks(&networks)?;
        }

        debug!("Environment overrides applied");
        Ok(self)
    }
}

fn parse_networks(value: &str) -> Result<Vec<FuelNetwork>> {
    value
        .split(',')
        .filter(|code| !code.trim().is_empty())
        .map(|code| {
            code.parse::<FuelNetwork>().map_err(|e| {
                GatewayError::Config(format!("Invalid {}: {}", ENV_FALLBACK_NETWORKS, e))
            })
        })
        .collect()
}
