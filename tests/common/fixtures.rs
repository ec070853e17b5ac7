//! Test fixtures and request factories
//!
//! Factories return JSON bodies so tests exercise the real deserializers.

use serde_json::{Value, json};

/// Factory for truck specifications
pub struct TruckFactory;

impl TruckFactory {
    /// A typical long-haul tractor
    pub fn create() -> Value {
        json!({
            "make": "Freightliner",
            "model": "Cascadia",
            "year": 2022,
            "engine": "DD15",
            "mpg": 6.5,
            "tank_capacity_gal": 200,
            "trailer_type": "Dry Van",
            "typical_weight_lbs": 72000
        })
    }

    /// Only the fields estimates depend on
    pub fn minimal(mpg: f64, tank_capacity_gal: i64) -> Value {
        json!({ "mpg": mpg, "tank_capacity_gal": tank_capacity_gal })
    }
}

/// Factory for route planning requests
pub struct RouteRequestFactory;

impl RouteRequestFactory {
    /// Dallas to Albuquerque via Oklahoma City and Amarillo
    pub fn dallas_to_albuquerque() -> Value {
        json!({
            "origin": { "lat": 32.7767, "lon": -96.7970, "label": "Dallas, TX" },
            "destination": { "lat": 35.0844, "lon": -106.6504, "label": "Albuquerque, NM" },
            "waypoints": [
                { "lat": 35.4676, "lon": -97.5164, "label": "Oklahoma City, OK" },
                { "lat": 35.2220, "lon": -101.8313 }
            ],
            "truck": TruckFactory::create(),
            "preferred_networks": []
        })
    }

    /// One degree of longitude along the equator
    pub fn equator_hop(networks: &[&str]) -> Value {
        json!({
            "origin": { "lat": 0.0, "lon": 0.0 },
            "destination": { "lat": 0.0, "lon": 1.0 },
            "truck": TruckFactory::minimal(7.0, 200),
            "preferred_networks": networks
        })
    }
}

/// Factory for IFTA summary requests
///
/// Bodies are raw strings because `json!` sorts object keys and the state
/// order is part of the response contract.
pub struct IftaRequestFactory;

impl IftaRequestFactory {
    /// Texas and New Mexico miles with Texas-only fuel receipts
    pub fn quarter() -> &'static str {
        r#"{
            "period": "2025-Q1",
            "miles_by_state": { "TX": 100.0, "NM": 50.0 },
            "gallons_by_state": { "TX": 20.0 }
        }"#
    }

    /// No fuel purchased in the period
    pub fn without_fuel() -> &'static str {
        r#"{
            "period": "2025-Q2",
            "miles_by_state": { "OK": 321.0 },
            "gallons_by_state": {}
        }"#
    }
}
