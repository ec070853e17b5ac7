//! Service-level handlers

use crate::utils::error::GatewayError;
use crate::{APP_NAME, VERSION, build_info};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

/// Endpoints advertised by the info handler
pub const ENDPOINTS: [&str; 3] = ["/v1/route/plan", "/v1/ifta/summary", "/v1/fuel/suggest"];

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "app": APP_NAME,
        "version": VERSION,
        "time": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    }))
}

/// Service information handler
pub async fn service_info() -> HttpResponse {
    let build = build_info();
    HttpResponse::Ok().json(json!({
        "name": APP_NAME,
        "version": VERSION,
        "health": "/health",
        "endpoints": ENDPOINTS,
        "build": {
            "git_hash": build.git_hash,
            "build_time": build.build_time,
        },
    }))
}

/// Fallback for unmatched paths
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    GatewayError::not_found(format!("No route for {} {}", req.method(), req.path()))
        .error_response_for(&req)
}
