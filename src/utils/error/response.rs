//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

/// Header carrying the per-request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

impl GatewayError {
    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Config(_) => "CONFIG_ERROR",
            GatewayError::Io(_) => "IO_ERROR",
            GatewayError::Validation(_) => "VALIDATION_ERROR",
            GatewayError::BadRequest(_) => "BAD_REQUEST",
            GatewayError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            GatewayError::NotFound(_) => "NOT_FOUND",
            GatewayError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Build the error response, tagging it with the request's ID
    pub fn error_response_for(&self, req: &HttpRequest) -> HttpResponse {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.build_response(request_id)
    }

    fn build_response(&self, request_id: Option<String>) -> HttpResponse {
        // Server-side details stay in the logs
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            "An internal error occurred".to_string()
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id,
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.build_response(None)
    }
}

impl From<JsonPayloadError> for GatewayError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Deserialize(e) if e.is_data() => {
                GatewayError::Validation(e.to_string())
            }
            JsonPayloadError::Deserialize(e) => {
                GatewayError::BadRequest(format!("Malformed JSON body: {}", e))
            }
            JsonPayloadError::ContentType => {
                GatewayError::BadRequest("Content type must be application/json".to_string())
            }
            JsonPayloadError::Overflow { limit } => GatewayError::PayloadTooLarge(format!(
                "Request body exceeds the {} byte limit",
                limit
            )),
            JsonPayloadError::OverflowKnownLength { length, limit } => {
                GatewayError::PayloadTooLarge(format!(
                    "Request body of {} bytes exceeds the {} byte limit",
                    length, limit
                ))
            }
            other => GatewayError::BadRequest(other.to_string()),
        }
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
