//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and the application factory
//! shared by the binary and the integration tests.

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::server::handlers::not_found;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, REQUEST_ID_HEADER, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    middleware::{Condition, DefaultHeaders},
    web,
};
use std::time::Duration;
use tracing::{debug, info};
use tracing_actix_web::TracingLogger;

/// Value of the `Server` response header
pub const SERVER_HEADER: &str = "MSR-Backend";

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");
        config.validate()?;
        config.server().cors.warn_if_permissive();

        Ok(Self {
            config: config.server().clone(),
            state: AppState::new(config.clone()),
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .client_request_timeout(Duration::from_secs(self.config.timeout))
            .bind(&bind_addr)
            .map_err(|e| {
                GatewayError::server(format!("Failed to bind to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    debug!("Setting up routes and middleware");

    let server_config = state.config.server();
    let cors_enabled = server_config.cors.enabled;
    let cors = build_cors(&server_config.cors);

    let json_config = web::JsonConfig::default()
        .limit(server_config.max_body_size)
        .error_handler(|err, req| {
            let error = GatewayError::from(err);
            let response = error.error_response_for(req);
            InternalError::from_response(error, response).into()
        });

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(Condition::new(cors_enabled, cors))
        .wrap(DefaultHeaders::new().add(("Server", SERVER_HEADER)))
        .wrap(RequestIdMiddleware)
        .wrap(TracingLogger::default())
        .configure(routes::configure_routes)
        .default_service(web::to(not_found))
}

fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = if methods.is_empty() {
        cors.allow_any_method()
    } else {
        cors.allowed_methods(methods)
    };

    let headers: Vec<actix_web::http::header::HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    cors = if headers.is_empty() {
        cors.allow_any_header()
    } else {
        cors.allowed_headers(headers)
    };

    cors = cors
        .expose_headers([REQUEST_ID_HEADER])
        .max_age(config.max_age as usize);

    if config.credentials_enabled() {
        cors = cors.supports_credentials();
    }

    cors
}
