//! Local UI chrome state (chat panel visibility, header spotlight).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of chat state so the decorative
//! layer can change without touching the session model.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use effects::glass::SurfaceMode;
use effects::spotlight::Spotlight;

/// Delay before the opening panel gets its `active` class, so the CSS
/// transition starts from the hidden pose.
pub const OPEN_DELAY_MS: u32 = 10;
/// Length of the closing transition before the panel is removed from layout.
pub const CLOSE_DELAY_MS: u32 = 500;

/// Visibility phase of the glass chat panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPanelPhase {
    #[default]
    Closed,
    /// Laid out but not yet `active`.
    Opening,
    Open,
    /// No longer `active`, waiting for the fade-out to finish.
    Closing,
}

impl ChatPanelPhase {
    /// Launcher clicked. Returns `true` if a transition started.
    pub fn open(&mut self) -> bool {
        match self {
            Self::Closed | Self::Closing => {
                *self = Self::Opening;
                true
            }
            Self::Opening | Self::Open => false,
        }
    }

    /// Close button clicked. Returns `true` if a transition started.
    pub fn close(&mut self) -> bool {
        match self {
            Self::Open | Self::Opening => {
                *self = Self::Closing;
                true
            }
            Self::Closed | Self::Closing => false,
        }
    }

    /// Transition timer fired for a transition that started in `from`.
    ///
    /// Ignored when the phase has moved on since the timer was armed.
    pub fn settle(&mut self, from: Self) {
        if *self != from {
            return;
        }
        *self = match from {
            Self::Opening => Self::Open,
            Self::Closing => Self::Closed,
            other => other,
        };
    }

    /// CSS `display` for the panel container.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Closed => "none",
            Self::Opening | Self::Open | Self::Closing => "flex",
        }
    }

    /// Whether the panel carries the `active` class.
    #[must_use]
    pub fn is_active(self) -> bool {
        self == Self::Open
    }

    /// Whether the panel occupies layout (and so has a measurable size).
    #[must_use]
    pub fn is_visible(self) -> bool {
        self != Self::Closed
    }
}

/// UI state for the chat panel and header decoration.
#[derive(Clone, Debug)]
pub struct UiState {
    pub chat_panel: ChatPanelPhase,
    pub spotlight: Spotlight,
    /// Last spotlight gradient. Kept after the pointer leaves so the overlay
    /// fades out in place instead of jumping.
    pub spotlight_background: String,
    pub surface_mode: SurfaceMode,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            chat_panel: ChatPanelPhase::Closed,
            spotlight: Spotlight::Hidden,
            spotlight_background: String::new(),
            surface_mode: SurfaceMode::Fallback,
        }
    }
}

impl UiState {
    /// Pointer moved over the header.
    pub fn track_pointer(&mut self, client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) {
        self.spotlight = Spotlight::track(client_x, client_y, rect_left, rect_top);
        if let Some(bg) = self.spotlight.background() {
            self.spotlight_background = bg;
        }
    }

    /// Pointer left the header.
    pub fn hide_spotlight(&mut self) {
        self.spotlight = Spotlight::Hidden;
    }
}
