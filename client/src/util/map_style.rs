//! Map widget options.
//!
//! Plain JSON so the styling can be checked without a browser; the Leaflet
//! bridge converts these to JS objects.

#[cfg(test)]
#[path = "map_style_test.rs"]
mod map_style_test;

use serde_json::{Value, json};
use session::map::{FLOAT_AREA_RADIUS_M, MAX_ZOOM};

/// DOM id of the map container.
pub const MAP_ELEMENT_ID: &str = "mapid";

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

const FLOAT_BLUE: &str = "#3498db";
const POINT_FILL: &str = "#2980b9";

/// `L.map` options. The default zoom control is replaced by one at the
/// bottom left.
#[must_use]
pub fn map_options() -> Value {
    json!({ "zoomControl": false })
}

#[must_use]
pub fn zoom_control_options() -> Value {
    json!({ "position": "bottomleft" })
}

#[must_use]
pub fn tile_options() -> Value {
    json!({ "attribution": TILE_ATTRIBUTION, "maxZoom": MAX_ZOOM })
}

/// Translucent coverage circle around a float.
#[must_use]
pub fn area_options() -> Value {
    json!({
        "radius": FLOAT_AREA_RADIUS_M,
        "color": FLOAT_BLUE,
        "fillColor": FLOAT_BLUE,
        "fillOpacity": 0.15,
        "weight": 1,
    })
}

/// Clickable point at a float's position.
#[must_use]
pub fn point_options() -> Value {
    json!({
        "radius": 10,
        "color": "#ffffff",
        "weight": 2,
        "fillColor": POINT_FILL,
        "fillOpacity": 1,
    })
}

/// Popup content for a float marker. Float names come from the static
/// catalog, so no escaping is needed.
#[must_use]
pub fn popup_html(name: &str) -> String {
    format!("<b>{name}</b>")
}
