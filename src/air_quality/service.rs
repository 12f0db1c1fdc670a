use std::sync::Arc;

use axum::body::Bytes;

use crate::error::ApiError;
use crate::upstream::WeatherProvider;

const SERVICE_NAME: &str = "air quality";

pub struct AirQualityService {
    provider: Arc<dyn WeatherProvider>,
}

impl AirQualityService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the air pollution reading for a coordinate pair.
    ///
    /// The payload is returned byte-for-byte without decoding; existing
    /// consumers depend on the exact upstream shape.
    pub async fn get_air_pollution(&self, lat: &str, lon: &str) -> Result<Bytes, ApiError> {
        tracing::debug!(lat = %lat, lon = %lon, "Fetching air pollution data");

        self.provider
            .air_pollution(lat, lon)
            .await
            .map_err(|e| ApiError::from_upstream(SERVICE_NAME, e))
    }
}
