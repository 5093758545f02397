//! One-line description of a listing result.

use std::fmt;

use crate::filter::QueryState;

/// Result count plus the active query, rendered as e.g.
/// `2 projects found for "react" in category "Web"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub count: usize,
    pub search_term: Option<String>,
    pub category: Option<String>,
}

impl ResultSummary {
    pub fn new(count: usize, query: &QueryState) -> Self {
        Self {
            count,
            search_term: query.has_search().then(|| query.search_term.clone()),
            category: query.has_category().then(|| query.selected_category.clone()),
        }
    }

    /// No records matched; callers show the reset-filters fallback.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Zero and one are both singular.
        let plural = if self.count > 1 { "s" } else { "" };
        write!(f, "{} project{plural} found", self.count)?;
        if let Some(term) = &self.search_term {
            write!(f, " for \"{term}\"")?;
        }
        if let Some(cat) = &self.category {
            write!(f, " in category \"{cat}\"")?;
        }
        Ok(())
    }
}
