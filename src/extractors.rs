use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::error::ApiError;

const MISSING_COORDS: &str = "Parameters 'lat' and 'lon' are required";

/// Raw coordinate query parameters as they appear in the URL
#[derive(Debug, Deserialize)]
struct CoordQuery {
    lat: Option<String>,
    lon: Option<String>,
}

/// Extracts the `lat`/`lon` pair shared by the weather and air-pollution routes.
///
/// Both parameters must be present and non-empty; otherwise the request is
/// rejected with 400 before any upstream call is made. Values are kept as
/// strings and forwarded to the provider unaltered.
#[derive(Debug)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

impl<S> FromRequestParts<S> for Coordinates
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<CoordQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingParameter(MISSING_COORDS))?;

        match (query.lat, query.lon) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => {
                Ok(Coordinates { lat, lon })
            }
            _ => Err(ApiError::MissingParameter(MISSING_COORDS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<Coordinates, ApiError> {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        Coordinates::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_both_coordinates_present() {
        let coords = extract("/weather?lat=-6.2&lon=106.8").await.unwrap();
        assert_eq!(coords.lat, "-6.2");
        assert_eq!(coords.lon, "106.8");
    }

    #[tokio::test]
    async fn test_missing_lon_is_rejected() {
        let err = extract("/weather?lat=-6.2").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter(_)));
    }

    #[tokio::test]
    async fn test_missing_lat_is_rejected() {
        let err = extract("/weather?lon=106.8").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter(_)));
    }

    #[tokio::test]
    async fn test_empty_values_are_rejected() {
        let err = extract("/weather?lat=&lon=106.8").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter(_)));

        let err = extract("/weather?lat=-6.2&lon=").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter(_)));
    }

    #[tokio::test]
    async fn test_no_query_string_is_rejected() {
        let err = extract("/weather").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter(_)));
    }
}
