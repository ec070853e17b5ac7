//! Route, fuel and fuel-tax estimation
//!
//! Closed-form estimates over validated requests. Nothing here performs I/O
//! or fails: callers are expected to run [`RequestValidator`] first.
//!
//! [`RequestValidator`]: crate::core::validation::RequestValidator

mod fuel;
mod ifta;
mod route;


pub use fuel::fuel_suggest;
pub use ifta::ifta_summary;
pub use route::plan_route;

use crate::config::EstimationConfig;
use crate::core::models::{
    FuelSuggestRequest, FuelSuggestResponse, IftaSummaryRequest, IftaSummaryResponse,
    RoutePlanRequest, RoutePlanResponse,
};
use crate::services::pricing::{FuelNetwork, FuelPriceTable};

/// Straight-line to road distance multiplier
pub const ROAD_FACTOR: f64 = 1.1;
/// Flat toll proxy in dollars per mile
pub const TOLL_RATE_PER_MILE: f64 = 0.03;
/// Assumed average speed for leg ETAs
pub const AVERAGE_SPEED_MPH: f64 = 55.0;
/// At most this many fuel stops are planned per route
pub const MAX_FUEL_STOPS: usize = 2;
/// Share of the tank filled at each planned route stop
pub const ROUTE_STOP_FILL_RATIO: f64 = 0.5;
/// Share of the tank filled by a single-network suggestion
pub const SUGGESTION_FILL_RATIO: f64 = 0.6;
/// Mock station numbers start here
pub const STATION_NUMBER_BASE: usize = 100;

/// Networks used when a route request names none
pub fn default_fallback_networks() -> Vec<FuelNetwork> {
    vec![FuelNetwork::Ta, FuelNetwork::Pilot]
}

/// Estimation entry point holding the configured mock data
#[derive(Debug, Clone)]
pub struct Estimator {
    prices: FuelPriceTable,
    fallback_networks: Vec<FuelNetwork>,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(FuelPriceTable::default(), default_fallback_networks())
    }
}

impl Estimator {
    pub fn new(prices: FuelPriceTable, fallback_networks: Vec<FuelNetwork>) -> Self {
        Self {
            prices,
            fallback_networks,
        }
    }

    /// Build from configuration
    pub fn from_config(config: &EstimationConfig) -> Self {
        let prices =
            FuelPriceTable::with_overrides(&config.fuel_prices, config.default_fuel_price);
        Self::new(prices, config.fallback_networks.clone())
    }

    pub fn prices(&self) -> &FuelPriceTable {
        &self.prices
    }

    pub fn fallback_networks(&self) -> &[FuelNetwork] {
        &self.fallback_networks
    }

    /// Plan distance, fuel, tolls and fuel stops for a route
    pub fn plan_route(&self, request: &RoutePlanRequest) -> RoutePlanResponse {
        plan_route(request, &self.prices, &self.fallback_networks)
    }

    /// Summarize per-state mileage and fuel for a reporting period
    pub fn ifta_summary(&self, request: &IftaSummaryRequest) -> IftaSummaryResponse {
        ifta_summary(request)
    }

    /// Suggest a single fuel purchase for a known distance
    pub fn fuel_suggest(&self, request: &FuelSuggestRequest) -> FuelSuggestResponse {
        fuel_suggest(request, &self.prices)
    }
}
