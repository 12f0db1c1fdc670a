use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::Client;
use thiserror::Error;

const GEOCODING_API_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
const FORECAST_API_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
const AIR_POLLUTION_API_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";

/// Number of geocoding matches requested per search
const GEOCODING_RESULT_LIMIT: &str = "5";

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("API key not configured")]
    ApiKeyNotConfigured,

    #[error("Failed to reach OpenWeatherMap: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("OpenWeatherMap returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Failed to read OpenWeatherMap response: {0}")]
    Read(#[source] reqwest::Error),
}

/// The single outbound capability shared by all handlers: build the provider
/// URL with the configured key, perform one GET, classify the outcome.
///
/// Production uses [`OpenWeatherClient`]; router tests substitute a stub.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Up to 5 raw geocoding matches for a free-text query
    async fn geocode(&self, query: &str) -> Result<Bytes, UpstreamError>;

    /// 5-day/3-hour forecast for a coordinate pair (metric units, fixed locale)
    async fn forecast(&self, lat: &str, lon: &str) -> Result<Bytes, UpstreamError>;

    /// Current air pollution reading for a coordinate pair
    async fn air_pollution(&self, lat: &str, lon: &str) -> Result<Bytes, UpstreamError>;
}

pub struct OpenWeatherClient {
    client: Client,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    /// Perform one GET against the provider. The key is checked before any
    /// network I/O so an unconfigured deployment fails without an outbound call.
    async fn fetch(&self, url: &str, params: &[(&str, &str)]) -> Result<Bytes, UpstreamError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::ApiKeyNotConfigured)?;

        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("appid", api_key)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Upstream request failed");
                UpstreamError::Unreachable(e)
            })?;

        let status = response.status();
        tracing::debug!(url = %url, status = %status, "Received upstream response");

        if status != reqwest::StatusCode::OK {
            // Keep the raw body for diagnostic passthrough; a failed read here
            // still surfaces the status
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.bytes().await.map_err(UpstreamError::Read)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn geocode(&self, query: &str) -> Result<Bytes, UpstreamError> {
        self.fetch(
            GEOCODING_API_URL,
            &[("q", query), ("limit", GEOCODING_RESULT_LIMIT)],
        )
        .await
    }

    async fn forecast(&self, lat: &str, lon: &str) -> Result<Bytes, UpstreamError> {
        self.fetch(
            FORECAST_API_URL,
            &[("lat", lat), ("lon", lon), ("units", "metric"), ("lang", "id")],
        )
        .await
    }

    async fn air_pollution(&self, lat: &str, lon: &str) -> Result<Bytes, UpstreamError> {
        self.fetch(AIR_POLLUTION_API_URL, &[("lat", lat), ("lon", lon)]).await
    }
}
