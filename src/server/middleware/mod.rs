//! HTTP middleware implementations
//!
//! - Request ID tracking

mod request_id;

pub use request_id::{RequestIdMiddleware, RequestIdMiddlewareService};
