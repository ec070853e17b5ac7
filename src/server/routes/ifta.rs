//! IFTA summary endpoint

use crate::core::models::IftaSummaryRequest;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{debug, info};

/// Summarize miles and fuel per jurisdiction
/// POST /v1/ifta/summary
pub async fn ifta_summary(
    state: web::Data<AppState>,
    request: web::Json<IftaSummaryRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    info!("IFTA summary request for period: {}", request.period);

    let summary = state.estimator.ifta_summary(&request);
    debug!(
        total_miles = summary.total_miles,
        total_gallons = summary.total_gallons,
        mpg = summary.mpg,
        "IFTA summary computed"
    );

    Ok(HttpResponse::Ok().json(summary))
}
