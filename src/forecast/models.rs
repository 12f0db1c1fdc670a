use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// The 5-day/3-hour forecast is decoded from the OpenWeatherMap response and
// re-serialized with the same field names. Upstream fields outside this
// subset are dropped by the decode.

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponse {
    pub list: Vec<ForecastPoint>,
    pub city: CityInfo,
}

/// One 3-hour forecast point
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    /// Forecast timestamp, unix UTC
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<WeatherCondition>,
    pub wind: Wind,
    /// Probability of precipitation, 0-1
    #[serde(default)]
    pub pop: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeatherCondition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Wind {
    pub speed: f64,
    pub deg: f64,
}

/// Static city metadata attached to the forecast
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}
