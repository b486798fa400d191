use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CITY_REQUIRED_MESSAGE: &str =
    "City name is required. Please provide 'city' parameter in query string or request body.";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Internal server error occurred while processing the request.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("City name is required")]
    Validation,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("JSON serialization failed: {}", err))
    }
}

/// Body of every non-200 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message; internal detail is never included.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Validation => CITY_REQUIRED_MESSAGE,
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("Error processing request: {}", detail);
        }
        (self.status(), Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_not_public() {
        let err = ApiError::Internal("database exploded".into());
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
        assert!(err.to_string().contains("database exploded"));
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse::new(CITY_REQUIRED_MESSAGE);
        let body = serde_json::to_value(body).unwrap();
        assert_eq!(body, serde_json::json!({ "error": CITY_REQUIRED_MESSAGE }));
    }
}
