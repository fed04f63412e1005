use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::matching::MatchError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A required query parameter is missing or empty. Carries the fixed
    /// client-facing message for the endpoint.
    #[error("{0}")]
    MissingParameter(&'static str),

    /// The query matched no records. Carries the fixed client-facing
    /// message for the endpoint.
    #[error("{0}")]
    NoMatches(&'static str),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ServerError::NoMatches(_) | ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Match(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::MissingParameter(_) => "BAD_REQUEST",
            ServerError::NoMatches(_) => "NO_MATCHES",
            ServerError::Match(_) => "MATCH_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        });

        (status, body).into_response()
    }
}
