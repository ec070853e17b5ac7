//! Fuel suggestion endpoint

use crate::core::RequestValidator;
use crate::core::models::FuelSuggestRequest;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::{debug, info, warn};

/// Suggest a fuel purchase
/// POST /v1/fuel/suggest
pub async fn fuel_suggest(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<FuelSuggestRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    info!(
        network = %request.network,
        route_distance_miles = request.route_distance_miles,
        "Fuel suggestion request"
    );

    if let Err(e) = RequestValidator::validate_fuel_suggest_request(&request) {
        warn!("Rejected fuel suggestion request: {}", e);
        return Ok(e.error_response_for(&req));
    }

    let suggestion = state.estimator.fuel_suggest(&request);
    debug!(
        est_total_cost = suggestion.est_total_cost,
        "Fuel suggestion computed"
    );

    Ok(HttpResponse::Ok().json(suggestion))
}
