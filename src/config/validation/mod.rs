//! Configuration validation
//!
//! - `config_validators`: validators for the application, server, CORS,
//!   estimation and logging sections
//! - `tests`: test suite for all validators

mod config_validators;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
