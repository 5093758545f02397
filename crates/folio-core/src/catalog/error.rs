//! Load-time catalog integrity errors.

use std::path::PathBuf;
use thiserror::Error;

/// A catalog that fails one of these checks is rejected as a whole; no
/// partially loaded catalog is ever handed to the filter.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("record #{index}: missing required field `{field}`")]
    MalformedRecord { index: usize, field: &'static str },

    #[error("record #{index}: duplicate id {id:?}")]
    DuplicateId { index: usize, id: String },

    #[error("record #{index}: duplicate slug {slug:?}")]
    DuplicateSlug { index: usize, slug: String },

    #[error("record #{index}: `{field}` is not an absolute http(s) URL: {value:?}")]
    InvalidLink {
        index: usize,
        field: &'static str,
        value: String,
    },
}
