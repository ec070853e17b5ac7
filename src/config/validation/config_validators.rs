//! Configuration validators

use super::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating application configuration");

        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.server
            .cors
            .validate()
            .map_err(|e| format!("CORS config error: {}", e))?;
        self.estimation
            .validate()
            .map_err(|e| format!("Estimation config error: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;

        debug!("Application configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.timeout == 0 {
            return Err("Server timeout must be greater than 0".to_string());
        }

        if self.timeout > 3600 {
            return Err("Server timeout should not exceed 1 hour".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        if self.max_body_size > 1024 * 1024 * 10 {
            return Err("Max body size should not exceed 10MB".to_string());
        }

        Ok(())
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        for origin in &self.allowed_origins {
            if origin != "*" && !(origin.starts_with("http://") || origin.starts_with("https://"))
            {
                return Err(format!(
                    "CORS origin '{}' must start with http:// or https://",
                    origin
                ));
            }
        }

        for method in &self.allowed_methods {
            if method.parse::<actix_web::http::Method>().is_err() {
                return Err(format!("Invalid CORS method: {}", method));
            }
        }

        Ok(())
    }
}

impl Validate for EstimationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.fallback_networks.is_empty() {
            return Err("At least one fallback fuel network is required".to_string());
        }

        if self.fallback_networks.len() > 2 {
            return Err(format!(
                "At most 2 fallback fuel networks are used, got {}",
                self.fallback_networks.len()
            ));
        }

        for (code, price) in &self.fuel_prices {
            if !price.is_finite() || *price <= 0.0 {
                return Err(format!("Fuel price for {} must be positive, got {}", code, price));
            }
        }

        if let Some(price) = self.default_fuel_price {
            if !price.is_finite() || price <= 0.0 {
                return Err(format!("Default fuel price must be positive, got {}", price));
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
