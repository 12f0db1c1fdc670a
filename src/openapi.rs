use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ErrorResponse;
use crate::forecast::models::{
    CityInfo, ForecastPoint, ForecastResponse, MainReadings, WeatherCondition, Wind,
};
use crate::search::models::LocationCandidate;

/// OpenAPI documentation for the Cuaca API
///
/// This provides basic schema documentation. Full path annotations
/// can be added incrementally to handlers as needed. The air-pollution
/// route has no schema on purpose: its body is an upstream passthrough.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cuaca API",
        version = "1.0.0",
        description = "Weather, geocoding and air quality proxy over OpenWeatherMap. Serves city search, 5-day forecasts and raw air pollution data with permissive CORS."
    ),
    tags(
        (name = "search", description = "Free-text city search (geocoding)"),
        (name = "weather", description = "5-day/3-hour forecast by coordinates"),
        (name = "air-pollution", description = "Air pollution passthrough by coordinates")
    ),
    components(
        schemas(
            ErrorResponse,
            LocationCandidate,
            ForecastResponse,
            ForecastPoint,
            MainReadings,
            WeatherCondition,
            Wind,
            CityInfo,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
