//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::Estimator;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup, so cloning per worker is
/// just a pair of reference count bumps.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Estimator built from the estimation section
    pub estimator: Arc<Estimator>,
}

impl AppState {
    /// Create a new AppState from configuration
    pub fn new(config: Config) -> Self {
        let estimator = Estimator::from_config(config.estimation());
        Self {
            config: Arc::new(config),
            estimator: Arc::new(estimator),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
