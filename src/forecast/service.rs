use std::sync::Arc;

use super::models::ForecastResponse;
use crate::error::ApiError;
use crate::upstream::WeatherProvider;

const SERVICE_NAME: &str = "weather";

pub struct ForecastService {
    provider: Arc<dyn WeatherProvider>,
}

impl ForecastService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the multi-point forecast for a coordinate pair and decode it.
    /// The decoded structure is returned whole; no further reshaping.
    pub async fn get_forecast(&self, lat: &str, lon: &str) -> Result<ForecastResponse, ApiError> {
        tracing::debug!(lat = %lat, lon = %lon, "Fetching forecast");

        let body = self
            .provider
            .forecast(lat, lon)
            .await
            .map_err(|e| ApiError::from_upstream(SERVICE_NAME, e))?;

        let forecast: ForecastResponse = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse forecast response");
            ApiError::ParseFailure(SERVICE_NAME)
        })?;

        tracing::info!(
            city = %forecast.city.name,
            points = forecast.list.len(),
            "Forecast fetched successfully"
        );

        Ok(forecast)
    }
}
