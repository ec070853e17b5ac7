//! Estimation configuration
//!
//! Product decisions that would otherwise be baked into the estimation code.

use crate::core::estimation::default_fallback_networks;
use crate::services::pricing::FuelNetwork;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mock data used by the estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Networks used for route fuel stops when the request names none
    #[serde(default = "default_fallback_networks")]
    pub fallback_networks: Vec<FuelNetwork>,
    /// Per-gallon price overrides keyed by network code
    #[serde(default)]
    pub fuel_prices: HashMap<String, f64>,
    /// Price for networks missing from the table
    #[serde(default)]
    pub default_fuel_price: Option<f64>,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            fallback_networks: default_fallback_networks(),
            fuel_prices: HashMap::new(),
            default_fuel_price: None,
        }
    }
}
