//! Boundary validation for estimation requests
//!
//! Deserialization already enforces field types and the fuel network enum.
//! The checks here cover truck and coordinate ranges. IFTA figures and the
//! fuel suggestion distance are taken as given, negatives included.

use crate::core::models::{FuelSuggestRequest, RoutePlanRequest, TruckSpec, Waypoint};
use crate::utils::error::{GatewayError, Result};

/// Exclusive bounds for truck fuel economy
pub const MPG_RANGE: (f64, f64) = (2.0, 15.0);
/// Exclusive bounds for tank capacity in gallons
pub const TANK_CAPACITY_RANGE: (i64, i64) = (50, 500);

/// Request validation utilities
pub struct RequestValidator;

impl RequestValidator {
    /// Validate route planning request
    pub fn validate_route_plan_request(request: &RoutePlanRequest) -> Result<()> {
        Self::validate_waypoint(&request.origin, "origin")?;
        Self::validate_waypoint(&request.destination, "destination")?;
        for (i, waypoint) in request.waypoints.iter().enumerate() {
            Self::validate_waypoint(waypoint, &format!("waypoints[{}]", i))?;
        }
        Self::validate_truck_spec(&request.truck)
    }

    /// Validate fuel suggestion request
    pub fn validate_fuel_suggest_request(request: &FuelSuggestRequest) -> Result<()> {
        Self::validate_truck_spec(&request.truck)
    }

    /// Validate truck spec ranges
    pub fn validate_truck_spec(truck: &TruckSpec) -> Result<()> {
        let (min_mpg, max_mpg) = MPG_RANGE;
        if !(truck.mpg > min_mpg && truck.mpg < max_mpg) {
            return Err(GatewayError::validation(format!(
                "truck.mpg must be greater than {} and less than {}, got {}",
                min_mpg, max_mpg, truck.mpg
            )));
        }

        let (min_tank, max_tank) = TANK_CAPACITY_RANGE;
        if truck.tank_capacity_gal <= min_tank || truck.tank_capacity_gal >= max_tank {
            return Err(GatewayError::validation(format!(
                "truck.tank_capacity_gal must be greater than {} and less than {}, got {}",
                min_tank, max_tank, truck.tank_capacity_gal
            )));
        }

        Ok(())
    }

    /// Validate coordinate ranges
    pub fn validate_waypoint(waypoint: &Waypoint, field: &str) -> Result<()> {
        if !(-90.0..=90.0).contains(&waypoint.lat) {
            return Err(GatewayError::validation(format!(
                "{}.lat must be between -90 and 90, got {}",
                field, waypoint.lat
            )));
        }
        if !(-180.0..=180.0).contains(&waypoint.lon) {
            return Err(GatewayError::validation(format!(
                "{}.lon must be between -180 and 180, got {}",
                field, waypoint.lon
            )));
        }
        Ok(())
    }
}
