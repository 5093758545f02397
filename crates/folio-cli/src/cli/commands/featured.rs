//! `folio featured` – featured projects for the home page.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::{featured_projects, Catalog};

use super::render::card_line;

pub fn run_featured(catalog: &Catalog, cfg: &FolioConfig, limit: usize) -> Result<()> {
    let featured = featured_projects(catalog.records(), limit);
    if featured.is_empty() {
        println!("No featured projects.");
        return Ok(());
    }
    for record in featured {
        println!("{}", card_line(record, cfg.tech_preview));
    }
    Ok(())
}
