use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error envelope returned for every non-success status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status: u16,
}

/// Custom error type for API endpoints
///
/// The fixture servers only ever produce two failure statuses: 404 for an
/// unmatched route and 500 for a fault while building a response. Both are
/// converted to the fixed JSON envelope here; internal error detail is
/// logged server-side and never reaches the client.
#[derive(Debug)]
pub enum ApiError {
    /// No route matched the request path
    NotFound(String),
    /// Unhandled fault while building a response
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("The requested URL {} was not found", path),
            ),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            status: status.as_u16(),
        });

        (status, body).into_response()
    }
}
