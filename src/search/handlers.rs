use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::models::LocationCandidate;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text place name
    pub q: Option<String>,
}

/// Search for cities matching a free-text query
///
/// GET /search?q=Jakarta
pub async fn search_cities(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<LocationCandidate>>, ApiError> {
    let q = query.q.as_deref().map(str::trim).unwrap_or_default();
    if q.is_empty() {
        return Err(ApiError::MissingParameter(
            "Search query 'q' must not be empty",
        ));
    }

    let candidates = state.search_service.search(q).await?;
    Ok(Json(candidates))
}
