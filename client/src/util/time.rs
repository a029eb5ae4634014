//! Local wall-clock time for message stamps.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use session::DisplayTime;

/// Current local time, or `None` outside the browser.
pub fn now() -> Option<DisplayTime> {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new_0();
        display_time(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Convert `Date#getHours` / `Date#getMinutes` values.
#[must_use]
pub fn display_time(hours: u32, minutes: u32) -> Option<DisplayTime> {
    DisplayTime::new(u8::try_from(hours).ok()?, u8::try_from(minutes).ok()?)
}
