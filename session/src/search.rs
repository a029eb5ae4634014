//! Search-box autocomplete over the float catalog.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::float::{Float, catalog};

/// Result of filtering the catalog for a query.
///
/// `Idle` and `Empty` both hide the suggestion list but are kept apart: the
/// first means nothing was typed, the second that the query matched nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum Suggestions {
    /// Query is empty; no suggestions are shown.
    Idle,
    /// Query is non-empty and matched no float.
    Empty,
    /// Matching floats in catalog order.
    Matches(Vec<&'static Float>),
}

impl Suggestions {
    /// Whether the suggestion list should be displayed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Matches(_))
    }

    /// Matching floats, empty for `Idle` and `Empty`.
    #[must_use]
    pub fn floats(&self) -> &[&'static Float] {
        match self {
            Self::Matches(floats) => floats,
            Self::Idle | Self::Empty => &[],
        }
    }
}

/// Case-insensitive substring match of `query` against every float name.
///
/// The query is not trimmed: a lone space is a real (if unhelpful) query.
#[must_use]
pub fn filter(query: &str) -> Suggestions {
    filter_in(catalog(), query)
}

/// [`filter`] over an explicit list.
#[must_use]
pub fn filter_in(floats: &'static [Float], query: &str) -> Suggestions {
    if query.is_empty() {
        return Suggestions::Idle;
    }
    let needle = query.to_lowercase();
    let matches = floats
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .collect::<Vec<_>>();
    if matches.is_empty() { Suggestions::Empty } else { Suggestions::Matches(matches) }
}
