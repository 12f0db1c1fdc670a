use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::air_quality::handlers as air_quality_handlers;
use crate::forecast::handlers as forecast_handlers;
use crate::openapi::swagger_ui;
use crate::search::handlers as search_handlers;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Proxy routes, served both bare and under the /api prefix the original
/// deployments exposed
fn proxy_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_handlers::search_cities))
        .route("/weather", get(forecast_handlers::get_forecast))
        .route(
            "/air-pollution",
            get(air_quality_handlers::get_air_pollution),
        )
}

/// CORS policy: GET/OPTIONS from any origin, or from the single origin
/// pinned in the config. Preflight OPTIONS requests are answered here
/// with a bare 200 and never reach the handlers.
fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    match allowed_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => cors.allow_origin(origin),
            Err(_) => {
                tracing::warn!(origin = %origin, "Invalid CORS origin in config, allowing any");
                cors.allow_origin(Any)
            }
        },
        None => cors.allow_origin(Any),
    }
}

/// Build the complete application router
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_allowed_origin.as_deref());

    Router::new()
        // Health check at root level
        .route("/", get(health))
        .route("/health", get(health))
        // Proxy routes at both surfaces
        .merge(proxy_routes())
        .nest("/api", proxy_routes())
        // Swagger UI for API documentation
        .merge(swagger_ui())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
