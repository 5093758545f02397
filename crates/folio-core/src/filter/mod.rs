//! Catalog filtering and selection.
//!
//! Every function here is a pure, order-preserving scan over an immutable
//! record slice. Results borrow from the catalog; nothing is copied or
//! re-sorted, so catalog order is the only tie-break. "No results" is an
//! empty vector, never an error.

mod matches;
mod query;

pub use query::{QueryState, ALL_CATEGORIES};

use matches::{matches_category, matches_text, Needle};

use crate::catalog::ProjectRecord;

/// `"all"` followed by each distinct category in order of first appearance.
pub fn list_categories(catalog: &[ProjectRecord]) -> Vec<&str> {
    let mut out = vec![ALL_CATEGORIES];
    for record in catalog {
        let category = record.category.as_str();
        if !out[1..].contains(&category) {
            out.push(category);
        }
    }
    tracing::trace!(categories = out.len() - 1, "list_categories");
    out
}

/// Records matching both the search text and the category selection.
pub fn filter_projects<'a>(
    catalog: &'a [ProjectRecord],
    query: &QueryState,
) -> Vec<&'a ProjectRecord> {
    let needle = Needle::new(&query.search_term);
    let out: Vec<&ProjectRecord> = catalog
        .iter()
        .filter(|r| matches_text(r, &needle) && matches_category(r, &query.selected_category))
        .collect();
    tracing::trace!(
        search = %query.search_term,
        category = %query.selected_category,
        matched = out.len(),
        "filter_projects"
    );
    out
}

/// First `limit` featured records.
pub fn featured_projects(catalog: &[ProjectRecord], limit: usize) -> Vec<&ProjectRecord> {
    let out: Vec<&ProjectRecord> = catalog.iter().filter(|r| r.featured).take(limit).collect();
    tracing::trace!(limit, matched = out.len(), "featured_projects");
    out
}

/// Exact, case-sensitive slug lookup. `None` is an ordinary outcome.
pub fn find_by_slug<'a>(catalog: &'a [ProjectRecord], slug: &str) -> Option<&'a ProjectRecord> {
    let found = catalog.iter().find(|r| r.slug == slug);
    if found.is_none() {
        tracing::debug!(slug, "no project with this slug");
    }
    found
}

/// Up to `limit` other records sharing `record`'s category.
pub fn related_projects<'a>(
    catalog: &'a [ProjectRecord],
    record: &ProjectRecord,
    limit: usize,
) -> Vec<&'a ProjectRecord> {
    let out: Vec<&ProjectRecord> = catalog
        .iter()
        .filter(|r| r.id != record.id && r.category == record.category)
        .take(limit)
        .collect();
    tracing::trace!(
        slug = %record.slug,
        category = %record.category,
        limit,
        matched = out.len(),
        "related_projects"
    );
    out
}
