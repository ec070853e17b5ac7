//! Server builder and run_server function

use crate::config::Config;
use crate::server::handlers::ENDPOINTS;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use crate::{APP_NAME, VERSION};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the server from `config` and run it until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting {} v{}", APP_NAME, VERSION);

    let server = ServerBuilder::new().with_config(config).build()?;
    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health");
    for endpoint in ENDPOINTS {
        info!("   POST {}", endpoint);
    }

    server.start().await
}
