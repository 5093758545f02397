//! Per-evaluation query state.

/// Category sentinel meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Search text and category selection for a single filtering call.
///
/// Owned by the caller and rebuilt on every interaction; the filter only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Case-insensitive free text; empty disables text filtering.
    pub search_term: String,
    /// `"all"` or a category from the catalog.
    pub selected_category: String,
}

impl QueryState {
    pub fn new(search_term: impl Into<String>, selected_category: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            selected_category: selected_category.into(),
        }
    }

    /// Text-only query across all categories.
    pub fn search(search_term: impl Into<String>) -> Self {
        Self::new(search_term, ALL_CATEGORIES)
    }

    /// Category-only query with no search text.
    pub fn category(selected_category: impl Into<String>) -> Self {
        Self::new(String::new(), selected_category)
    }

    pub fn has_search(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn has_category(&self) -> bool {
        self.selected_category != ALL_CATEGORIES
    }

    /// True when the query would return the whole catalog.
    pub fn is_unfiltered(&self) -> bool {
        !self.has_search() && !self.has_category()
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(String::new(), ALL_CATEGORIES)
    }
}
