//! Centralized constants for the place-roulette crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// External API endpoints
pub mod api {
    /// GeoJS IP geolocation endpoint (free, no key required)
    pub const GEOJS_URL: &str = "https://get.geojs.io/v1/ip/geo.json";

    /// Google Places Nearby Search endpoint
    pub const NEARBY_SEARCH_URL: &str =
        "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
}

/// Search settings
pub mod search {
    use std::time::Duration;

    /// Default search radius in meters
    pub const DEFAULT_RADIUS_METERS: u32 = 1000;

    /// Wait before requesting a page with a fresh page token.
    /// Nearby Search tokens take a moment to become valid upstream.
    pub const PAGE_TOKEN_DELAY: Duration = Duration::from_secs(2);
}

/// Output settings
pub mod output {
    /// Map URL template; `{lat}` and `{lng}` are substituted with the
    /// chosen place's coordinates (marker and view center alike)
    pub const MAP_URL_TEMPLATE: &str =
        "http://maps.google.com/maps?q={lat},{lng}+(My+Point)&z=14&ll={lat},{lng}";
}
