use std::sync::Arc;

use super::models::{GeoMatch, LocationCandidate};
use crate::error::ApiError;
use crate::upstream::WeatherProvider;

const SERVICE_NAME: &str = "geocoding";

pub struct SearchService {
    provider: Arc<dyn WeatherProvider>,
}

impl SearchService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Resolve a free-text query to location candidates, preserving upstream
    /// order. An empty upstream result is a valid empty list, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, ApiError> {
        tracing::debug!(query = %query, "Searching cities");

        let body = self
            .provider
            .geocode(query)
            .await
            .map_err(|e| ApiError::from_upstream(SERVICE_NAME, e))?;

        let matches: Vec<GeoMatch> = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse geocoding response");
            ApiError::ParseFailure(SERVICE_NAME)
        })?;

        tracing::debug!(query = %query, matches = matches.len(), "Geocoding complete");

        Ok(matches.into_iter().map(LocationCandidate::from).collect())
    }
}
