use super::{
    AVERAGE_SPEED_MPH, MAX_FUEL_STOPS, ROAD_FACTOR, ROUTE_STOP_FILL_RATIO, STATION_NUMBER_BASE,
    TOLL_RATE_PER_MILE,
};
use crate::core::geo::round_to;
use crate::core::models::{
    CURRENCY, FuelStop, RouteLeg, RoutePlanRequest, RoutePlanResponse, Waypoint,
};
use crate::services::pricing::{FuelNetwork, FuelPriceTable};
use tracing::debug;

const ROUTE_STOP_NOTE: &str = "Mock suggestion \u{2014} replace with live pricing later.";

/// Plan a route through origin, waypoints and destination
///
/// Leg distances are rounded independently of the total, so they may not sum
/// to `total_distance_miles` exactly.
pub fn plan_route(
    request: &RoutePlanRequest,
    prices: &FuelPriceTable,
    fallback_networks: &[FuelNetwork],
) -> RoutePlanResponse {
    let points = request.points();

    let straight_line: f64 = points.windows(2).map(|w| w[0].distance_to(w[1])).sum();
    let total_distance_miles = round_to(straight_line * ROAD_FACTOR, 1);
    let est_fuel_gallons = round_to(total_distance_miles / request.truck.mpg, 2);

    let networks: &[FuelNetwork] = if request.preferred_networks.is_empty() {
        fallback_networks
    } else {
        request.preferred_networks.as_slice()
    };
    let stops = plan_fuel_stops(
        &points,
        networks,
        est_fuel_gallons,
        request.truck.tank_capacity(),
        prices,
    );

    let est_fuel_cost = round_to(stops.iter().map(FuelStop::cost).sum(), 2);
    let toll_cost_est = if request.avoid_tolls {
        0.0
    } else {
        round_to(total_distance_miles * TOLL_RATE_PER_MILE, 2)
    };

    debug!(
        total_distance_miles = total_distance_miles,
        est_fuel_gallons = est_fuel_gallons,
        est_fuel_cost = est_fuel_cost,
        stops = stops.len(),
        "Route planned"
    );

    RoutePlanResponse {
        total_distance_miles,
        est_fuel_gallons,
        est_fuel_cost,
        toll_cost_est,
        legs: build_legs(&points),
        suggested_fuel_stops: stops,
        currency: CURRENCY.to_string(),
    }
}

/// Allocate fuel purchases across up to two networks
///
/// Each stop buys half a tank or whatever is still needed, whichever is
/// smaller. Planning stops as soon as nothing more is needed.
fn plan_fuel_stops(
    points: &[&Waypoint],
    networks: &[FuelNetwork],
    gallons_needed: f64,
    tank_capacity: f64,
    prices: &FuelPriceTable,
) -> Vec<FuelStop> {
    let last = points.len().saturating_sub(1);
    let mut remaining = gallons_needed;
    let mut stops = Vec::with_capacity(MAX_FUEL_STOPS);

    for (i, network) in networks.iter().take(MAX_FUEL_STOPS).enumerate() {
        let buy = round_to(remaining.min(tank_capacity * ROUTE_STOP_FILL_RATIO), 1);
        remaining -= buy;

        let location = points[(i + 1).min(last)];
        stops.push(FuelStop {
            network: *network,
            name: format!("{} Station #{}", network, STATION_NUMBER_BASE + i),
            lat: location.lat,
            lon: location.lon,
            price_per_gal: prices.price(*network),
            gallons_to_buy: buy,
            note: Some(ROUTE_STOP_NOTE.to_string()),
        });

        if remaining <= 0.0 {
            break;
        }
    }

    stops
}

fn build_legs(points: &[&Waypoint]) -> Vec<RouteLeg> {
    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let distance_miles = round_to(pair[0].distance_to(pair[1]) * ROAD_FACTOR, 1);
            RouteLeg {
                from_label: pair[0].display_label(i),
                to_label: pair[1].display_label(i + 1),
                distance_miles,
                eta_minutes: (distance_miles / AVERAGE_SPEED_MPH * 60.0).floor() as u32,
            }
        })
        .collect()
}
