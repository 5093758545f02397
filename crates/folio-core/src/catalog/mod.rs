//! Project catalog: loaded once at startup, read-only afterwards.
//!
//! The catalog is a JSON array of project objects. A default catalog is
//! compiled into the crate; an external file can replace it. Every record is
//! validated at load time so the filter never sees incomplete input.

mod error;
mod load;
mod record;

pub use error::CatalogError;
pub use record::ProjectRecord;

pub(crate) use load::is_http_url;

use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../data/projects.json");

/// Immutable, validated sequence of project records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records = load::parse_records(json)?;
        tracing::debug!(records = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    /// Read, parse and validate a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!("loaded {} projects from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Load from `path` if given, otherwise the bundled catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::bundled(),
        }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.records().iter().any(|r| r.featured));
    }

    #[test]
    fn from_path_reads_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(br#"[{"id":"x","slug":"x","title":"X","category":"Tooling"}]"#)
            .unwrap();
        f.flush().unwrap();
        let catalog = Catalog::from_path(f.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].category, "Tooling");
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_path(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn load_without_path_uses_bundled() {
        let catalog = Catalog::load(None).unwrap();
        assert_eq!(catalog.len(), Catalog::bundled().unwrap().len());
    }

    #[test]
    fn empty_array_is_empty_catalog() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
