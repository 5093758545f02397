//! Project card helpers: technology badge preview and detail route.

use crate::catalog::ProjectRecord;

/// Leading technologies to show on a card plus the count of hidden ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechPreview<'a> {
    pub shown: &'a [String],
    pub overflow: usize,
}

impl TechPreview<'_> {
    /// `+N` badge text, if anything is hidden.
    pub fn overflow_badge(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}

pub fn tech_preview(record: &ProjectRecord, max: usize) -> TechPreview<'_> {
    let n = record.technologies.len().min(max);
    TechPreview {
        shown: &record.technologies[..n],
        overflow: record.technologies.len() - n,
    }
}

/// Route of the project's detail page.
pub fn project_path(record: &ProjectRecord) -> String {
    format!("/project/{}", record.slug)
}
