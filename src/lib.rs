//! # MSR Backend
//!
//! Backend for the My Smart Road trucking assistant: route planning, fuel
//! stop suggestions, toll estimates and IFTA (fuel-tax) summaries.
//!
//! External services are mocked. Distances come from great-circle geometry,
//! fuel prices from a fixed table. Every estimate is a pure function of the
//! request, so the library can be used without the HTTP layer:
//!
//! ```rust
//! use msr_backend::core::Estimator;
//! use msr_backend::core::models::{RoutePlanRequest, TruckSpec, Waypoint};
//!
//! let request = RoutePlanRequest::new(
//!     Waypoint::new(0.0, 0.0),
//!     Waypoint::new(0.0, 1.0),
//!     TruckSpec::new(7.0, 200),
//! );
//! let plan = Estimator::default().plan_route(&request);
//! assert_eq!(plan.total_distance_miles, 76.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

pub use config::Config;
pub use utils::error::{GatewayError, Result};

/// Display name reported by the info and health endpoints
pub const APP_NAME: &str = "MSR Backend";
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
