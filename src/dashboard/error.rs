//! Dashboard Error Types
//!
//! Defines error types for the dashboard layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Dashboard error types
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Page or figure could not be rendered
    #[error("Render error: {0}")]
    Render(String),

    /// Data loading failed
    #[error("Data error: {0}")]
    Data(#[from] crate::data::DataError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Render(err.to_string())
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

impl DashboardError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            DashboardError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            DashboardError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            DashboardError::Data(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATA_ERROR"),
            DashboardError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            DashboardError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Dashboard error occurred"
            );
        } else {
            tracing::debug!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let response = DashboardError::NotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = DashboardError::Render("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_data_error_conversion() {
        let err: DashboardError =
            crate::data::DataError::MissingColumn("Year".to_string()).into();
        assert_eq!(err.to_string(), "Data error: Missing required column: Year");
    }
}
