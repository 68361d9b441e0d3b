//! Output formatting
//!
//! Builds the map URL for a chosen coordinate pair. Pure string work, no
//! network.

use crate::constants::output::MAP_URL_TEMPLATE;
use crate::geo::Coordinates;

/// Format the map URL for the chosen place
///
/// Replaces `{lat}` and `{lng}` in the template; the same pair serves as
/// the marker position and the view center.
pub fn map_url(coords: Coordinates) -> String {
    MAP_URL_TEMPLATE
        .replace("{lat}", &coords.lat.to_string())
        .replace("{lng}", &coords.lng.to_string())
}
