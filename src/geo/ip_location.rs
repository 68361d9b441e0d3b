//! IP-based geolocation
//!
//! Uses GeoJS to resolve the caller's coordinates from their IP address.
//! One request per run, no retry, no caching.

use crate::constants::api::GEOJS_URL;
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use serde::Deserialize;
use tracing::debug;

/// IP location service
#[derive(Debug)]
pub struct IpLocator {
    client: reqwest::Client,
}

/// GeoJS geo.json response
///
/// The upstream serves `latitude`/`longitude` as numeric strings, but the
/// numeric form is accepted too.
#[derive(Debug, Deserialize)]
struct GeoJsResponse {
    latitude: Option<CoordField>,
    longitude: Option<CoordField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CoordField {
    Num(f64),
    Text(String),
}

impl CoordField {
    fn as_f64(&self) -> Option<f64> {
        match self {
            CoordField::Num(value) => Some(*value),
            CoordField::Text(text) => text.parse().ok(),
        }
    }
}

impl IpLocator {
    /// Create a new IP locator
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Get current location based on IP address
    pub async fn locate(&self) -> Result<Coordinates> {
        let response = self
            .client
            .get(GEOJS_URL)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Geolocation request failed: {}", e.without_url())))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Geolocation service returned status: {}",
                response.status()
            )));
        }

        let body: GeoJsResponse = response.json().await.map_err(|e| {
            Error::Parse(format!(
                "Failed to decode geolocation response: {}",
                e.without_url()
            ))
        })?;

        let coords = Self::coordinates_from(body)?;
        debug!("Resolved IP location to ({}, {})", coords.lat, coords.lng);
        Ok(coords)
    }

    /// Extract coordinates from a decoded response body
    fn coordinates_from(body: GeoJsResponse) -> Result<Coordinates> {
        let lat = body
            .latitude
            .as_ref()
            .and_then(CoordField::as_f64)
            .ok_or_else(|| Error::Parse("No latitude in geolocation response".to_string()))?;
        let lng = body
            .longitude
            .as_ref()
            .and_then(CoordField::as_f64)
            .ok_or_else(|| Error::Parse("No longitude in geolocation response".to_string()))?;

        Ok(Coordinates::new(lat, lng))
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coordinates_from_numeric_strings() {
        // GeoJS serves coordinates as strings
        let body: GeoJsResponse =
            serde_json::from_str(r#"{"latitude":"37.7749","longitude":"-122.4194"}"#).unwrap();

        let coords = IpLocator::coordinates_from(body).unwrap();
        assert_relative_eq!(coords.lat, 37.7749);
        assert_relative_eq!(coords.lng, -122.4194);
    }

    #[test]
    fn test_coordinates_from_numbers() {
        let body: GeoJsResponse =
            serde_json::from_str(r#"{"latitude":37.7749,"longitude":-122.4194}"#).unwrap();

        let coords = IpLocator::coordinates_from(body).unwrap();
        assert_relative_eq!(coords.lat, 37.7749);
        assert_relative_eq!(coords.lng, -122.4194);
    }

    #[test]
    fn test_coordinates_from_missing_fields() {
        let body: GeoJsResponse =
            serde_json::from_str(r#"{"latitude":"37.7749"}"#).unwrap();

        let result = IpLocator::coordinates_from(body);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_coordinates_from_unparsable_text() {
        let body: GeoJsResponse =
            serde_json::from_str(r#"{"latitude":"north","longitude":"-122.4194"}"#).unwrap();

        let result = IpLocator::coordinates_from(body);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_extra_fields_ignored() {
        // The real response carries many more fields than we consume
        let body: GeoJsResponse = serde_json::from_str(
            r#"{
                "organization": "AS1234 Example",
                "city": "San Francisco",
                "timezone": "America/Los_Angeles",
                "latitude": "37.7749",
                "longitude": "-122.4194",
                "country": "United States",
                "ip": "203.0.113.7"
            }"#,
        )
        .unwrap();

        assert!(IpLocator::coordinates_from(body).is_ok());
    }

    #[test]
    fn test_locator_creation() {
        let locator = IpLocator::new();
        assert!(format!("{:?}", locator).contains("IpLocator"));
    }
}
