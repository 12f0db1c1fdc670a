use axum::{extract::State, http::header, response::IntoResponse};

use crate::error::ApiError;
use crate::extractors::Coordinates;
use crate::AppState;

/// Current air pollution reading for a coordinate pair
///
/// GET /air-pollution?lat=-6.2&lon=106.8
///
/// Unlike the weather route, the upstream body is passed through verbatim.
pub async fn get_air_pollution(
    State(state): State<AppState>,
    coords: Coordinates,
) -> Result<impl IntoResponse, ApiError> {
    let body = state
        .air_quality_service
        .get_air_pollution(&coords.lat, &coords.lon)
        .await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
