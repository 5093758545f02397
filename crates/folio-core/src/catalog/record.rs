//! Project record as loaded from the catalog file.

use serde::Deserialize;

/// One project entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: String,
    /// URL-safe identifier used for direct lookup.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    /// Tag labels in display order. Duplicates are kept.
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    /// Grouping key for category filtering and related projects.
    pub category: String,
    pub featured: bool,
}

/// Wire shape of a record before validation. Required fields are optional
/// here so a missing one is reported by name instead of as a generic serde error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawRecord {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}
