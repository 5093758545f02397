pub mod config;
pub mod logging;

pub mod card;
pub mod catalog;
pub mod filter;
pub mod seo;
pub mod summary;

pub use catalog::{Catalog, CatalogError, ProjectRecord};
pub use filter::{
    featured_projects, filter_projects, find_by_slug, list_categories, related_projects,
    QueryState, ALL_CATEGORIES,
};
