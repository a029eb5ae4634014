//! The active-float slot that scopes chat questions.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// Holds the name of the currently active float, if any.
///
/// Writes overwrite the previous value. Readers take a snapshot with
/// [`SelectionContext::current`]; a later write never reaches a request that
/// was already built from an earlier snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionContext {
    active: Option<String>,
}

impl SelectionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active float.
    pub fn set(&mut self, name: impl Into<String>) {
        self.active = Some(name.into());
    }

    /// Owned snapshot of the active float name.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.active.clone()
    }

    /// Borrowed view of the active float name.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
