//! HTTP error type and its JSON envelope.
//!
//! Every failed request is answered with:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::RenderError;
use crate::domain::encoder::EncodeError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. } | AppError::Internal { message, .. } => {
                f.write_str(message)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::EmptyInput => AppError::bad_request(e.to_string(), json!({})),
            RenderError::Encode(EncodeError::DataTooLong) => AppError::bad_request(
                "Value is too long to encode as a QR code",
                json!({ "field": "value" }),
            ),
            RenderError::Encode(EncodeError::Failed(reason)) => {
                tracing::error!("QR encoding failed: {}", reason);
                AppError::internal("QR encoding failed", json!({}))
            }
            RenderError::Canvas(size) => {
                tracing::error!("Canvas allocation failed for size {}", size);
                AppError::internal("Image allocation failed", json!({}))
            }
            RenderError::Png(err) => {
                tracing::error!("PNG encoding failed: {}", err);
                AppError::internal("Image encoding failed", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_maps_to_bad_request() {
        let err: AppError = RenderError::EmptyInput.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing \"value\"");
    }

    #[test]
    fn test_data_too_long_maps_to_bad_request() {
        let err: AppError = RenderError::Encode(EncodeError::DataTooLong).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_encoder_failure_maps_to_internal() {
        let err: AppError = RenderError::Encode(EncodeError::Failed("boom".into())).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::bad_request("nope", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
