use super::TruckSpec;
use crate::services::pricing::FuelNetwork;
use serde::{Deserialize, Serialize};

/// A suggested place to buy fuel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelStop {
    pub network: FuelNetwork,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub price_per_gal: f64,
    pub gallons_to_buy: f64,
    #[serde(default)]
    pub note: Option<String>,
}

impl FuelStop {
    /// Cost of the purchase at this stop, unrounded
    pub fn cost(&self) -> f64 {
        self.price_per_gal * self.gallons_to_buy
    }
}

/// Single-network fuel suggestion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelSuggestRequest {
    pub network: FuelNetwork,
    pub route_distance_miles: f64,
    pub truck: TruckSpec,
}

/// Single-network fuel suggestion result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelSuggestResponse {
    pub recommended_stops: Vec<FuelStop>,
    pub est_total_cost: f64,
    #[serde(default)]
    pub notes: Option<String>,
}
