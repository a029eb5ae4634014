//! Static catalog of ocean floats shown on the map.

#[cfg(test)]
#[path = "float_test.rs"]
mod float_test;

use serde::Serialize;

/// Geographic position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A named oceanographic sensor station with a fixed position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Float {
    /// Unique, human-readable identifier. Also the value sent to the chat
    /// service as `selected_float`.
    pub name: &'static str,
    pub coordinates: Coordinates,
}

/// Every float known to the UI, in display order.
pub const FLOATS: [Float; 5] = [
    Float { name: "Gujarat Coast Float", coordinates: Coordinates::new(21.0, 67.5) },
    Float { name: "Konkan Coast Float", coordinates: Coordinates::new(16.5, 71.5) },
    Float { name: "Malabar Coast Float", coordinates: Coordinates::new(9.0, 74.5) },
    Float { name: "Coromandel Coast Float", coordinates: Coordinates::new(15.0, 83.5) },
    Float { name: "Andaman Sea Float", coordinates: Coordinates::new(12.0, 94.0) },
];

/// The full catalog as a slice.
#[must_use]
pub fn catalog() -> &'static [Float] {
    &FLOATS
}

/// Look up a float by exact name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Float> {
    FLOATS.iter().find(|f| f.name == name)
}

/// Look up a float by name, ignoring ASCII case and surrounding whitespace.
///
/// Used by the terminal client where names are typed by hand.
#[must_use]
pub fn find_loose(name: &str) -> Option<&'static Float> {
    let name = name.trim();
    FLOATS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}
