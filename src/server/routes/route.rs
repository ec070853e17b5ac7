//! Route planning endpoint

use crate::core::RequestValidator;
use crate::core::models::RoutePlanRequest;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::{debug, info, warn};

/// Plan a route
/// POST /v1/route/plan
pub async fn plan_route(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<RoutePlanRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    info!(
        waypoints = request.waypoints.len(),
        avoid_tolls = request.avoid_tolls,
        "Route plan request"
    );

    if let Err(e) = RequestValidator::validate_route_plan_request(&request) {
        warn!("Rejected route plan request: {}", e);
        return Ok(e.error_response_for(&req));
    }

    let plan = state.estimator.plan_route(&request);
    debug!(
        total_distance_miles = plan.total_distance_miles,
        est_fuel_gallons = plan.est_fuel_gallons,
        fuel_stops = plan.suggested_fuel_stops.len(),
        "Route planned"
    );

    Ok(HttpResponse::Ok().json(plan))
}
