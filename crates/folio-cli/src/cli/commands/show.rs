//! `folio show <slug>` – project detail with related projects.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::{find_by_slug, related_projects, Catalog};
use std::fmt::Write;

use super::render::card_line;

pub fn run_show(catalog: &Catalog, cfg: &FolioConfig, slug: &str, related: usize) -> Result<()> {
    print!("{}", render_show(catalog, cfg, slug, related)?);
    Ok(())
}

/// An unknown slug renders the not-found page; it is not an error.
pub(crate) fn render_show(
    catalog: &Catalog,
    cfg: &FolioConfig,
    slug: &str,
    related: usize,
) -> Result<String> {
    let mut out = String::new();
    let Some(project) = find_by_slug(catalog.records(), slug) else {
        writeln!(out, "Project not found: {slug}")?;
        writeln!(out, "The project you are looking for does not exist. See `folio list`.")?;
        return Ok(out);
    };

    writeln!(out, "{}", project.title)?;
    writeln!(out, "Category: {}", project.category)?;
    writeln!(out)?;
    writeln!(out, "{}", project.description)?;
    if !project.long_description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", project.long_description)?;
    }
    writeln!(out)?;
    if !project.technologies.is_empty() {
        writeln!(out, "Technologies: {}", project.technologies.join(", "))?;
    }
    if let Some(url) = &project.live_url {
        writeln!(out, "Live site:    {url}")?;
    }
    if let Some(url) = &project.github_url {
        writeln!(out, "Source code:  {url}")?;
    }

    let related = related_projects(catalog.records(), project, related);
    if !related.is_empty() {
        writeln!(out)?;
        writeln!(out, "Related projects:")?;
        for record in related {
            writeln!(out, "{}", card_line(record, cfg.tech_preview))?;
        }
    }
    Ok(out)
}
