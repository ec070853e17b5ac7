//! Fuel price lookup table

use super::types::FuelNetwork;
use std::collections::HashMap;
use tracing::debug;

/// Price charged by networks missing from the table
pub const DEFAULT_FUEL_PRICE: f64 = 4.09;

/// Mock per-gallon prices keyed by network code
///
/// Lookups never fail: codes missing from the table resolve to the
/// default price.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelPriceTable {
    prices: HashMap<String, f64>,
    default_price: f64,
}

impl Default for FuelPriceTable {
    fn default() -> Self {
        Self::new(default_prices(), DEFAULT_FUEL_PRICE)
    }
}

impl FuelPriceTable {
    /// Create a table from explicit prices and a fallback price
    pub fn new(prices: HashMap<String, f64>, default_price: f64) -> Self {
        Self {
            prices,
            default_price,
        }
    }

    /// Start from the built-in prices and apply overrides on top
    pub fn with_overrides(overrides: &HashMap<String, f64>, default_price: Option<f64>) -> Self {
        let mut table = Self::default();
        for (code, price) in overrides {
            debug!("Overriding fuel price for {}: {}", code, price);
            table.prices.insert(code.clone(), *price);
        }
        if let Some(price) = default_price {
            table.default_price = price;
        }
        table
    }

    /// Price per gallon for a network code
    pub fn price_for(&self, code: &str) -> f64 {
        self.prices
            .get(code)
            .copied()
            .unwrap_or(self.default_price)
    }

    /// Price per gallon for a network
    pub fn price(&self, network: FuelNetwork) -> f64 {
        self.price_for(network.as_str())
    }

    /// Price used for unknown networks
    pub fn default_price(&self) -> f64 {
        self.default_price
    }

    /// Network codes with an explicit price, sorted
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.prices.keys().cloned().collect();
        codes.sort();
        codes
    }
}

fn default_prices() -> HashMap<String, f64> {
    [
        (FuelNetwork::Ta, 3.95),
        (FuelNetwork::Pilot, 3.99),
        (FuelNetwork::Loves, 4.03),
        (FuelNetwork::Petro, 3.97),
    ]
    .into_iter()
    .map(|(network, price)| (network.as_str().to_string(), price))
    .collect()
}
