//! HTTP route modules
//!
//! Estimation endpoints live under `/v1`; liveness and service info sit at
//! the root.

pub mod fuel;
pub mod ifta;
pub mod route;

use crate::server::handlers::{health_check, service_info};
use actix_web::web;

/// Register every route on the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(service_info))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/v1")
                .route("/route/plan", web::post().to(route::plan_route))
                .route("/ifta/summary", web::post().to(ifta::ifta_summary))
                .route("/fuel/suggest", web::post().to(fuel::fuel_suggest)),
        );
}
