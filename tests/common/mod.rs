//! Common test utilities for msr-backend

pub mod fixtures;

pub use fixtures::{IftaRequestFactory, RouteRequestFactory, TruckFactory};

use actix_web::{App, web};
use msr_backend::config::Config;
use msr_backend::server::{AppState, create_app};

/// Application wired exactly as the server builds it, with default config
pub fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with(Config::default())
}

/// Application built from a custom configuration
pub fn test_app_with(
    config: Config,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    create_app(web::Data::new(AppState::new(config)))
}
