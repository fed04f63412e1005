//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `search`: Teacher and course name lookups

pub mod health;
pub mod search;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Landing page (GET /): service name, version, and available endpoints.
pub async fn landing() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "course-search",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/search/teacher?name=<teacher name>",
            "/search/course?name=<course name>",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
