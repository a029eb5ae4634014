//! Header spotlight that follows the mouse.

#[cfg(test)]
#[path = "spotlight_test.rs"]
mod spotlight_test;

/// Glow radius in CSS pixels.
pub const SPOTLIGHT_RADIUS_PX: f64 = 250.0;

/// Spotlight overlay state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Spotlight {
    #[default]
    Hidden,
    /// Pointer position relative to the header's top-left corner.
    At { x: f64, y: f64 },
}

impl Spotlight {
    /// Pointer moved over the header. `client_*` are viewport coordinates of
    /// the pointer, `rect_*` the header's bounding box origin.
    #[must_use]
    pub fn track(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self::At { x: client_x - rect_left, y: client_y - rect_top }
    }

    /// CSS `opacity` of the overlay.
    #[must_use]
    pub fn opacity(self) -> &'static str {
        match self {
            Self::Hidden => "0",
            Self::At { .. } => "1",
        }
    }

    /// CSS `background`, or `None` to keep the last gradient while fading out.
    #[must_use]
    pub fn background(self) -> Option<String> {
        match self {
            Self::Hidden => None,
            Self::At { x, y } => Some(format!(
                "radial-gradient(circle at {x}px {y}px, rgba(56, 189, 248, 0.2), transparent {SPOTLIGHT_RADIUS_PX}px)"
            )),
        }
    }
}
