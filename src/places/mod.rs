//! Place search against the Places Nearby Search API
//!
//! Request and response types, the paginated fetch loop, and the rating
//! filter that turns raw API records into the working set.

pub mod client;
pub mod filter;

use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};

/// Parameters for one nearby search, fixed across the paginated sequence
#[derive(Debug, Clone)]
pub struct NearbyQuery {
    pub keyword: String,
    pub location: Coordinates,
    pub radius_meters: u32,
    pub open_now: bool,
}

impl NearbyQuery {
    /// Nearby search restricted to currently-open venues
    pub fn new(keyword: impl Into<String>, location: Coordinates, radius_meters: u32) -> Self {
        Self {
            keyword: keyword.into(),
            location,
            radius_meters,
            open_now: true,
        }
    }
}

/// One page of the Nearby Search response
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<RawPlace>,

    /// Token for the next page, absent on the last one
    pub next_page_token: Option<String>,

    /// API-level status code (`OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...)
    #[serde(default)]
    pub status: String,

    /// Human-readable detail accompanying error statuses
    pub error_message: Option<String>,
}

impl SearchPage {
    /// Whether the API-level status indicates a usable page
    pub fn status_ok(&self) -> bool {
        matches!(self.status.as_str(), "OK" | "ZERO_RESULTS")
    }
}

/// A place record as returned by the API
///
/// Only the consumed fields are modeled; everything else in the response
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    pub name: String,
    pub place_id: String,
    pub rating: Option<f64>,
    pub price_level: Option<u8>,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

/// A place that passed the rating filter, flattened for downstream use
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPlace {
    pub name: String,
    pub place_id: String,
    pub rating: f64,
    pub price_level: Option<u8>,
    pub latitude: f64,
    pub longitude: f64,
}

impl NormalizedPlace {
    /// Coordinate pair of this place
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}
