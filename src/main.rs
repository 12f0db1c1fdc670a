mod air_quality;
mod config;
mod error;
mod extractors;
mod forecast;
mod openapi;
mod routes;
mod search;
mod upstream;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::air_quality::AirQualityService;
use crate::config::AppConfig;
use crate::forecast::ForecastService;
use crate::search::SearchService;
use crate::upstream::{OpenWeatherClient, WeatherProvider};

/// Shared HTTP client configuration. Upstream calls keep the client's
/// default request timeout.
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 90;

#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<SearchService>,
    pub forecast_service: Arc<ForecastService>,
    pub air_quality_service: Arc<AirQualityService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire all services to a single upstream provider
    pub fn new(provider: Arc<dyn WeatherProvider>, config: AppConfig) -> Self {
        Self {
            search_service: Arc::new(SearchService::new(Arc::clone(&provider))),
            forecast_service: Arc::new(ForecastService::new(Arc::clone(&provider))),
            air_quality_service: Arc::new(AirQualityService::new(provider)),
            config: Arc::new(config),
        }
    }
}

/// Create shared HTTP client with connection pooling
fn create_http_client() -> Client {
    Client::builder()
        .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to create HTTP client")
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl+c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cuaca_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // A missing key degrades to a per-request 500 instead of refusing to start
    if config.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY is not set; upstream requests will fail with 500");
    }

    // Shared HTTP client behind the single upstream provider
    let http_client = create_http_client();
    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherClient::new(
        http_client,
        config.openweather_api_key.clone(),
    ));

    let state = AppState::new(provider, config.clone());
    let app = routes::build_router(state);

    // Start server with graceful shutdown
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
