//! Map view model.
//!
//! The map widget itself lives in the browser; this module only tracks what
//! it should show: where the camera should fly and which float (if any)
//! carries the search marker. The UI reconciles the widget against this state
//! whenever [`MapView::revision`] changes.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use crate::float::{Coordinates, Float};
use crate::session::ChatSession;

/// Initial map center over the Indian Ocean.
pub const INITIAL_CENTER: Coordinates = Coordinates::new(15.0, 80.0);
/// Initial zoom level.
pub const INITIAL_ZOOM: u8 = 5;
/// Zoom level used when flying to a float.
pub const FOCUS_ZOOM: u8 = 7;
/// Maximum tile zoom.
pub const MAX_ZOOM: u8 = 18;
/// Radius of the translucent area drawn around each float, in meters.
pub const FLOAT_AREA_RADIUS_M: f64 = 200_000.0;

/// Camera position requested from the map widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTarget {
    pub center: Coordinates,
    pub zoom: u8,
    /// `false` for the initial `setView`, `true` for `flyTo`.
    pub animate: bool,
}

/// Desired map state.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    target: ViewTarget,
    search_marker: Option<&'static Float>,
    revision: u64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            target: ViewTarget { center: INITIAL_CENTER, zoom: INITIAL_ZOOM, animate: false },
            search_marker: None,
            revision: 0,
        }
    }
}

impl MapView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fly the camera to `float`.
    pub fn fly_to(&mut self, float: &Float) {
        self.target = ViewTarget { center: float.coordinates, zoom: FOCUS_ZOOM, animate: true };
        self.revision += 1;
    }

    /// Put the search marker on `float`, returning the float it moved off.
    pub fn place_search_marker(&mut self, float: &'static Float) -> Option<&'static Float> {
        self.revision += 1;
        self.search_marker.replace(float)
    }

    #[must_use]
    pub fn target(&self) -> ViewTarget {
        self.target
    }

    /// Float currently carrying the search marker. At most one exists.
    #[must_use]
    pub fn search_marker(&self) -> Option<&'static Float> {
        self.search_marker
    }

    /// Bumped on every change the widget has to apply.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// A float picked from the search suggestions.
///
/// Flies to it, moves the search marker onto it and makes it the active chat
/// context.
pub fn choose(map: &mut MapView, session: &mut ChatSession, float: &'static Float) {
    map.fly_to(float);
    map.place_search_marker(float);
    session.select(float.name);
}

/// A float marker clicked on the map. Leaves the search marker alone.
pub fn click_marker(map: &mut MapView, session: &mut ChatSession, float: &'static Float) {
    map.fly_to(float);
    session.select(float.name);
}
