use super::{CURRENCY, FuelStop, TruckSpec, Waypoint};
use crate::services::pricing::FuelNetwork;
use serde::{Deserialize, Serialize};

/// Route planning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlanRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    /// Intermediate stops, in travel order
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
    pub truck: TruckSpec,
    /// Networks to buy fuel from; only the first two are used
    #[serde(default)]
    pub preferred_networks: Vec<FuelNetwork>,
    #[serde(default)]
    pub avoid_tolls: bool,
    /// Reserved for the weigh station map layer
    #[serde(default = "default_true")]
    pub use_weigh_stations_layer: bool,
}

impl RoutePlanRequest {
    pub fn new(origin: Waypoint, destination: Waypoint, truck: TruckSpec) -> Self {
        Self {
            origin,
            destination,
            waypoints: Vec::new(),
            truck,
            preferred_networks: Vec::new(),
            avoid_tolls: false,
            use_weigh_stations_layer: true,
        }
    }

    pub fn with_waypoints(mut self, waypoints: Vec<Waypoint>) -> Self {
        self.waypoints = waypoints;
        self
    }

    pub fn with_networks(mut self, networks: Vec<FuelNetwork>) -> Self {
        self.preferred_networks = networks;
        self
    }

    pub fn avoiding_tolls(mut self) -> Self {
        self.avoid_tolls = true;
        self
    }

    /// Origin, waypoints and destination in travel order
    pub fn points(&self) -> Vec<&Waypoint> {
        std::iter::once(&self.origin)
            .chain(self.waypoints.iter())
            .chain(std::iter::once(&self.destination))
            .collect()
    }
}

/// One segment between two consecutive route points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from_label: String,
    pub to_label: String,
    pub distance_miles: f64,
    pub eta_minutes: u32,
}

/// Route planning result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlanResponse {
    pub total_distance_miles: f64,
    pub est_fuel_gallons: f64,
    pub est_fuel_cost: f64,
    pub toll_cost_est: f64,
    pub legs: Vec<RouteLeg>,
    pub suggested_fuel_stops: Vec<FuelStop>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    CURRENCY.to_string()
}
