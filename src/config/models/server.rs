//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    #[serde(default)]
    pub workers: Option<usize>,
    /// Client request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Maximum JSON body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            timeout: default_timeout(),
            max_body_size: default_max_body_size(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the number of workers (defaults to CPU count)
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Enable CORS
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Allowed origins (empty or `*` means allow all)
    #[serde(default = "default_cors_origins")]
    pub allowed_origins: Vec<String>,
    /// Allowed methods (empty means any)
    #[serde(default)]
    pub allowed_methods: Vec<String>,
    /// Allowed headers (empty means any)
    #[serde(default)]
    pub allowed_headers: Vec<String>,
    /// Max age for preflight requests
    #[serde(default = "default_cors_max_age")]
    pub max_age: u32,
    /// Allow credentials; only honoured with an explicit origin list
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: default_cors_origins(),
            allowed_methods: Vec::new(),
            allowed_headers: Vec::new(),
            max_age: default_cors_max_age(),
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Parse a comma-separated origin list such as `CORS_ALLOW_ORIGINS`
    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Check if CORS allows all origins
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Whether credentialed requests are enabled
    pub fn credentials_enabled(&self) -> bool {
        self.allow_credentials && !self.allows_all_origins()
    }

    /// Log configurations that are fine for development but not production
    pub fn warn_if_permissive(&self) {
        if self.enabled && self.allows_all_origins() {
            warn!("CORS allows all origins. Set CORS_ALLOW_ORIGINS to restrict it in production.");
            if self.allow_credentials {
                warn!("CORS credentials are ignored while all origins are allowed");
            }
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_max_age() -> u32 {
    3600
}
