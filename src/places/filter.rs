//! Rating filter
//!
//! Pure projection from raw API records into the working set. No side
//! effects, no re-sorting.

use crate::places::{NormalizedPlace, RawPlace};

/// Keep the places rated strictly above `min_rating`, preserving order
///
/// Unrated places are dropped. A place rated exactly at the threshold is
/// excluded.
pub fn filter_by_rating(places: Vec<RawPlace>, min_rating: f64) -> Vec<NormalizedPlace> {
    places
        .into_iter()
        .filter_map(|place| {
            let rating = place.rating?;
            if rating > min_rating {
                Some(NormalizedPlace {
                    name: place.name,
                    place_id: place.place_id,
                    rating,
                    price_level: place.price_level,
                    latitude: place.geometry.location.lat,
                    longitude: place.geometry.location.lng,
                })
            } else {
                None
            }
        })
        .collect()
}
