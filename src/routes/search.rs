use crate::catalog::Record;
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Query parameters for both search endpoints.
///
/// `name` is deserialized as optional so a missing parameter is reported
/// with the endpoint's fixed message rather than a framework rejection.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// Search records by teacher name.
///
/// Applies exact, case-insensitive subsequence, and pinyin-initial prefix
/// matching over the teacher field, returning matched rows with exact
/// matches first and null fields dropped. A missing or empty `name` is a
/// 400; an empty result set is a 404.
pub async fn search_teacher(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchQuery>,
) -> ServerResult<impl IntoResponse> {
    let name = require_name(params, "Teacher name is required")?;

    let rows = state.engine.search_teachers(&state.catalog, &name)?;
    tracing::debug!(query = %name, matches = rows.len(), "Teacher search");

    if rows.is_empty() {
        return Err(ServerError::NoMatches("No courses found for this teacher"));
    }
    Ok(Json(serialize_rows(&rows)))
}

/// Search records by course name.
///
/// Same response contract as the teacher search, but matching is exact plus
/// case-sensitive subsequence only.
pub async fn search_course(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchQuery>,
) -> ServerResult<impl IntoResponse> {
    let name = require_name(params, "Course name is required")?;

    let rows = state.engine.search_courses(&state.catalog, &name)?;
    tracing::debug!(query = %name, matches = rows.len(), "Course search");

    if rows.is_empty() {
        return Err(ServerError::NoMatches("No reviews found for this course"));
    }
    Ok(Json(serialize_rows(&rows)))
}

/// Missing and empty `name` are equivalent, and both rejected before any
/// strategy runs.
fn require_name(params: SearchQuery, message: &'static str) -> Result<String, ServerError> {
    params
        .name
        .filter(|name| !name.is_empty())
        .ok_or(ServerError::MissingParameter(message))
}

fn serialize_rows(rows: &[Record]) -> Vec<Map<String, Value>> {
    rows.iter().map(Record::without_nulls).collect()
}
