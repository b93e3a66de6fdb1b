//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;
use thiserror::Error;

use crate::query::QueryError;

/// Message returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Year or threshold is not a well-formed integer
    #[error("{0}")]
    InvalidParameter(String),

    /// Requested year does not exist in the dataset
    #[error("No data found for the specified year")]
    NoDataForYear(i32),

    /// Unexpected failure; the detail is logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::YearNotFound(year) => ApiError::NoDataForYear(year),
            QueryError::InvalidChartType(_) => ApiError::InvalidParameter(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, "INVALID_PARAMETER"),
            ApiError::NoDataForYear(_) => (StatusCode::NOT_FOUND, "NO_DATA_FOR_YEAR"),
            ApiError::Internal(_) | ApiError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }

    /// Message safe to return to clients
    fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) | ApiError::Io(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.public_message(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Turn a handler panic into the generic internal error response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = ApiError::InvalidParameter("Invalid year parameter".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = ApiError::NoDataForYear(2025);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = ApiError::Internal("boom".to_string());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_query_error_conversion() {
        let err: ApiError = QueryError::YearNotFound(2025).into();
        assert!(matches!(err, ApiError::NoDataForYear(2025)));

        let err: ApiError = QueryError::InvalidChartType("donut".to_string()).into();
        assert!(matches!(err, ApiError::InvalidParameter(_)));
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = ApiError::Internal("secret stack detail".to_string());
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);

        let err = ApiError::NoDataForYear(2025);
        assert_eq!(err.public_message(), "No data found for the specified year");
    }

    #[test]
    fn test_handle_panic() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
