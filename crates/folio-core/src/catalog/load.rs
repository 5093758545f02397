//! Parse and validate raw catalog records.

use std::collections::HashSet;

use url::Url;

use super::error::CatalogError;
use super::record::{ProjectRecord, RawRecord};

pub(super) fn parse_records(json: &str) -> Result<Vec<ProjectRecord>, CatalogError> {
    let raw: Vec<RawRecord> = serde_json::from_str(json)?;
    validate(raw)
}

/// Checks required fields, id/slug uniqueness and link shape.
fn validate(raw: Vec<RawRecord>) -> Result<Vec<ProjectRecord>, CatalogError> {
    let mut ids = HashSet::with_capacity(raw.len());
    let mut slugs = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for (index, r) in raw.into_iter().enumerate() {
        let id = required(r.id, index, "id")?;
        let slug = required(r.slug, index, "slug")?;
        let title = required(r.title, index, "title")?;
        let category = required(r.category, index, "category")?;

        if !ids.insert(id.clone()) {
            return Err(CatalogError::DuplicateId { index, id });
        }
        if !slugs.insert(slug.clone()) {
            return Err(CatalogError::DuplicateSlug { index, slug });
        }

        let live_url = link(r.live_url, index, "liveUrl")?;
        let github_url = link(r.github_url, index, "githubUrl")?;

        records.push(ProjectRecord {
            id,
            slug,
            title,
            description: r.description,
            long_description: r.long_description,
            image: r.image,
            technologies: r.technologies,
            live_url,
            github_url,
            category,
            featured: r.featured,
        });
    }

    Ok(records)
}

fn required(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String, CatalogError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CatalogError::MalformedRecord { index, field }),
    }
}

/// Empty link strings count as absent.
fn link(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<Option<String>, CatalogError> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    if is_http_url(&value) {
        Ok(Some(value))
    } else {
        Err(CatalogError::InvalidLink {
            index,
            field,
            value,
        })
    }
}

pub(crate) fn is_http_url(s: &str) -> bool {
    Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}
