use axum::{extract::State, Json};

use super::models::ForecastResponse;
use crate::error::ApiError;
use crate::extractors::Coordinates;
use crate::AppState;

/// 5-day/3-hour forecast for a coordinate pair
///
/// GET /weather?lat=-6.2&lon=106.8
pub async fn get_forecast(
    State(state): State<AppState>,
    coords: Coordinates,
) -> Result<Json<ForecastResponse>, ApiError> {
    let forecast = state
        .forecast_service
        .get_forecast(&coords.lat, &coords.lon)
        .await?;
    Ok(Json(forecast))
}
