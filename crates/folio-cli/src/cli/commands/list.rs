//! `folio list` – filtered project listing.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::summary::ResultSummary;
use folio_core::{filter_projects, Catalog, QueryState};
use std::fmt::Write;

use super::render::card_line;

pub fn run_list(
    catalog: &Catalog,
    cfg: &FolioConfig,
    search: String,
    category: String,
) -> Result<()> {
    let query = QueryState::new(search, category);
    print!("{}", render_list(catalog, cfg, &query)?);
    Ok(())
}

pub(crate) fn render_list(
    catalog: &Catalog,
    cfg: &FolioConfig,
    query: &QueryState,
) -> Result<String> {
    let matched = filter_projects(catalog.records(), query);
    let summary = ResultSummary::new(matched.len(), query);
    tracing::debug!(%summary, "list");

    let mut out = String::new();
    writeln!(out, "{summary}")?;
    if summary.is_empty() {
        writeln!(
            out,
            "No projects found. Try another search term, or reset filters with --category all."
        )?;
        return Ok(out);
    }
    for record in matched {
        writeln!(out, "{}", card_line(record, cfg.tech_preview))?;
    }
    Ok(out)
}
