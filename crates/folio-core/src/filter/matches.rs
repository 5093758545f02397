//! Per-record predicates.

use crate::catalog::ProjectRecord;

use super::query::ALL_CATEGORIES;

/// Search term lowercased once per query instead of once per record.
#[derive(Debug, Clone)]
pub(crate) struct Needle(String);

impl Needle {
    pub(crate) fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

/// Title, description or any technology contains the needle. Empty needle matches.
pub(crate) fn matches_text(record: &ProjectRecord, needle: &Needle) -> bool {
    if needle.0.is_empty() {
        return true;
    }
    needle.found_in(&record.title)
        || needle.found_in(&record.description)
        || record.technologies.iter().any(|t| needle.found_in(t))
}

/// Exact, case-sensitive category comparison; the sentinel matches everything.
pub(crate) fn matches_category(record: &ProjectRecord, selected: &str) -> bool {
    selected == ALL_CATEGORIES || record.category == selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: "1".into(),
            slug: "shop".into(),
            title: "Shop App".into(),
            description: "Online store".into(),
            long_description: "Mentions Kubernetes only here".into(),
            image: String::new(),
            technologies: vec!["React".into(), "Node".into()],
            live_url: None,
            github_url: None,
            category: "Web".into(),
            featured: true,
        }
    }

    #[test]
    fn text_matches_title_description_and_tags() {
        let r = record();
        assert!(matches_text(&r, &Needle::new("shop")));
        assert!(matches_text(&r, &Needle::new("STORE")));
        assert!(matches_text(&r, &Needle::new("reac")));
        assert!(matches_text(&r, &Needle::new("")));
    }

    #[test]
    fn text_ignores_long_description_and_category() {
        let r = record();
        assert!(!matches_text(&r, &Needle::new("kubernetes")));
        assert!(!matches_text(&r, &Needle::new("web")));
    }

    #[test]
    fn category_is_case_sensitive() {
        let r = record();
        assert!(matches_category(&r, "all"));
        assert!(matches_category(&r, "Web"));
        assert!(!matches_category(&r, "web"));
        assert!(!matches_category(&r, "Mobile"));
    }

    #[test]
    fn non_ascii_lowercasing() {
        let mut r = record();
        r.title = "Études Élégantes".into();
        assert!(matches_text(&r, &Needle::new("ÉLÉG")));
    }
}
