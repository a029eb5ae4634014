//! Search box state: the typed query and whether the suggestion list is open.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use session::Float;
use session::search::{Suggestions, filter};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Set when the list was closed by picking a float or clicking elsewhere.
    /// Cleared by the next keystroke.
    pub dismissed: bool,
}

impl SearchState {
    /// User typed into the search box.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.dismissed = false;
    }

    /// Current suggestions for the query.
    #[must_use]
    pub fn suggestions(&self) -> Suggestions {
        filter(&self.query)
    }

    /// Whether the suggestion list is displayed.
    #[must_use]
    pub fn list_visible(&self) -> bool {
        !self.dismissed && self.suggestions().is_visible()
    }

    /// A suggestion was picked: echo its name into the box and close the list.
    pub fn pick(&mut self, float: &Float) {
        self.query = float.name.to_owned();
        self.dismissed = true;
    }

    /// Click outside the search box.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }
}
