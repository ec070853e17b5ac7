use super::SUGGESTION_FILL_RATIO;
use crate::core::geo::round_to;
use crate::core::models::{FuelStop, FuelSuggestRequest, FuelSuggestResponse};
use crate::services::pricing::FuelPriceTable;

const SUGGESTION_NOTE: &str = "Mock suggestion based on average price.";

/// Suggest one purchase at the requested network
///
/// There is no station data, so the stop sits at (0, 0).
pub fn fuel_suggest(request: &FuelSuggestRequest, prices: &FuelPriceTable) -> FuelSuggestResponse {
    let price_per_gal = prices.price(request.network);
    let gallons = round_to(request.route_distance_miles / request.truck.mpg, 2);
    let gallons_to_buy = gallons.min(request.truck.tank_capacity() * SUGGESTION_FILL_RATIO);

    let stop = FuelStop {
        network: request.network,
        name: format!("{} Suggested", request.network),
        lat: 0.0,
        lon: 0.0,
        price_per_gal,
        gallons_to_buy,
        note: Some(SUGGESTION_NOTE.to_string()),
    };
    let est_total_cost = round_to(stop.cost(), 2);

    FuelSuggestResponse {
        recommended_stops: vec![stop],
        est_total_cost,
        notes: None,
    }
}
