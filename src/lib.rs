//! place-roulette: Random Nearby Place Picker
//!
//! A library and CLI tool that picks a random well-rated place near the
//! user's current (IP-derived) location using the Google Places API.
//!
//! ## Features
//!
//! - IP geolocation via GeoJS (no API key required)
//! - Paginated Nearby Search with open-now filtering
//! - Strict minimum-rating filter
//! - Uniform random pick, seedable for reproducible runs
//! - Google Maps URL output
//!
//! ## Quick Start
//!
//! ```rust
//! use place_roulette::pick::{self, SeededRandom};
//! use place_roulette::places::filter::filter_by_rating;
//! use place_roulette::places::{Geometry, RawPlace};
//! use place_roulette::{format, Coordinates};
//!
//! let places = vec![RawPlace {
//!     name: "Blue Door Cafe".to_string(),
//!     place_id: "abc123".to_string(),
//!     rating: Some(4.6),
//!     price_level: Some(2),
//!     geometry: Geometry {
//!         location: Coordinates::new(1.2921, 103.8520),
//!     },
//! }];
//!
//! // Keep places rated strictly above 4.0
//! let qualified = filter_by_rating(places, 4.0);
//!
//! // Pick one at random (seeded here for reproducibility)
//! let rng = SeededRandom::new(42);
//! let place = pick::pick_place(&qualified, &rng).unwrap();
//! println!("{}", format::map_url(place.coordinates()));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod input;
pub mod pick;
pub mod places;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::Coordinates;
pub use input::SearchCriteria;
pub use places::{NormalizedPlace, RawPlace};
