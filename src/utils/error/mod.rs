//! Error handling for the MSR backend
//!
//! This module defines the error type used throughout the crate and its
//! mapping onto HTTP responses.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse, REQUEST_ID_HEADER};
pub use types::{GatewayError, Result};
