//! Request ID middleware
//!
//! Tags every request with a fresh UUID v4. The ID is written into the
//! request headers, where error responses pick it up, and echoed back on
//! the response.

use crate::utils::error::REQUEST_ID_HEADER;
use crate::utils::generate_request_id;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Request ID middleware for Actix-web
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestIdMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddlewareService { service }))
    }
}

/// Service implementation for request ID middleware
pub struct RequestIdMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let request_id = generate_request_id();
        let header_name = HeaderName::from_static(REQUEST_ID_HEADER);
        let header_value = HeaderValue::from_str(&request_id).ok();

        if let Some(value) = &header_value {
            req.headers_mut().insert(header_name.clone(), value.clone());
        }

        debug!(
            request_id = %request_id,
            method = %req.method(),
            path = %req.path(),
            "Processing request"
        );

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            if let Some(value) = header_value {
                res.headers_mut().insert(header_name, value);
            }
            Ok(res)
        })
    }
}
