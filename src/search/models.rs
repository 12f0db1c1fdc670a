use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw match from the OpenWeatherMap geocoding API
#[derive(Debug, Deserialize)]
pub struct GeoMatch {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Location candidate returned to clients
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationCandidate {
    pub name: String,
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
}

impl From<GeoMatch> for LocationCandidate {
    fn from(m: GeoMatch) -> Self {
        let display_name = display_name(&m.name, m.state.as_deref(), &m.country);
        Self {
            name: m.name,
            display_name,
            lat: m.lat,
            lon: m.lon,
            country: m.country,
        }
    }
}

/// Compose the human-readable label from place, optional region and country.
/// The region segment is dropped when absent or identical to the place name;
/// the country code is always the last part.
fn display_name(name: &str, state: Option<&str>, country: &str) -> String {
    let mut parts = vec![name];
    if let Some(state) = state {
        if !state.is_empty() && state != name {
            parts.push(state);
        }
    }
    parts.push(country);
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_without_state() {
        assert_eq!(display_name("Jakarta", None, "ID"), "Jakarta, ID");
        assert_eq!(display_name("Jakarta", Some(""), "ID"), "Jakarta, ID");
    }

    #[test]
    fn test_display_name_with_distinct_state() {
        assert_eq!(
            display_name("Paris", Some("Île-de-France"), "FR"),
            "Paris, Île-de-France, FR"
        );
    }

    #[test]
    fn test_display_name_drops_state_equal_to_name() {
        assert_eq!(
            display_name("Singapore", Some("Singapore"), "SG"),
            "Singapore, SG"
        );
    }

    #[test]
    fn test_geo_match_deserializes_without_state() {
        let raw = r#"{"name":"Jakarta","lat":-6.2,"lon":106.8,"country":"ID"}"#;
        let m: GeoMatch = serde_json::from_str(raw).unwrap();
        assert_eq!(m.name, "Jakarta");
        assert!(m.state.is_none());

        let candidate = LocationCandidate::from(m);
        assert_eq!(candidate.display_name, "Jakarta, ID");
    }

    #[test]
    fn test_candidate_serializes_with_camel_case_display_name() {
        let candidate = LocationCandidate::from(GeoMatch {
            name: "Paris".to_string(),
            lat: 48.85,
            lon: 2.35,
            country: "FR".to_string(),
            state: Some("Île-de-France".to_string()),
        });

        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["displayName"], "Paris, Île-de-France, FR");
        assert_eq!(value["name"], "Paris");
        assert_eq!(value["country"], "FR");
    }
}
