//! `folio categories` – list category filters.

use anyhow::Result;
use folio_core::{list_categories, Catalog};

pub fn run_categories(catalog: &Catalog) -> Result<()> {
    for category in list_categories(catalog.records()) {
        println!("{category}");
    }
    Ok(())
}
