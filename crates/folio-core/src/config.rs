use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::is_http_url;
use crate::seo::SiteConfig;

/// Global configuration loaded from `~/.config/folio/config.toml`.
///
/// Every field has a default, so a partial file (or an empty one) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// External catalog JSON file; None = catalog bundled with the binary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Number of featured projects on the home page.
    pub featured_limit: usize,
    /// Number of related projects on a detail page.
    pub related_limit: usize,
    /// Technologies shown on a project card before the `+N` badge.
    pub tech_preview: usize,
    /// Page metadata defaults.
    pub site: SiteConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            featured_limit: 3,
            related_limit: 2,
            tech_preview: 3,
            site: SiteConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Checks values once after load so per-call code can trust them.
    /// Zero limits are valid and simply produce empty selections.
    pub fn validate(&self) -> Result<()> {
        if self.site.site_title.trim().is_empty() {
            anyhow::bail!("site.site_title must not be empty");
        }
        if !is_http_url(&self.site.base_url) {
            anyhow::bail!(
                "site.base_url must be an absolute http(s) URL, got {:?}",
                self.site.base_url
            );
        }
        if self.tech_preview == 0 {
            anyhow::bail!("tech_preview must be at least 1");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("folio")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<FolioConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FolioConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FolioConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FolioConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = FolioConfig::default();
        assert!(cfg.catalog_path.is_none());
        assert_eq!(cfg.featured_limit, 3);
        assert_eq!(cfg.related_limit, 2);
        assert_eq!(cfg.tech_preview, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FolioConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FolioConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            featured_limit = 6
            catalog_path = "/srv/folio/projects.json"

            [site]
            site_title = "Jane Doe"
        "#;
        let cfg: FolioConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.featured_limit, 6);
        assert_eq!(cfg.related_limit, 2);
        assert_eq!(
            cfg.catalog_path.as_deref(),
            Some(Path::new("/srv/folio/projects.json"))
        );
        assert_eq!(cfg.site.site_title, "Jane Doe");
        assert_eq!(cfg.site.base_url, SiteConfig::default().base_url);
    }

    #[test]
    fn zero_limits_are_valid() {
        let cfg = FolioConfig {
            featured_limit: 0,
            related_limit: 0,
            ..FolioConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut cfg = FolioConfig::default();
        cfg.site.base_url = "portfolio.example.com".into();
        assert!(cfg.validate().is_err());

        let mut cfg = FolioConfig::default();
        cfg.site.site_title = " ".into();
        assert!(cfg.validate().is_err());

        let cfg = FolioConfig {
            tech_preview: 0,
            ..FolioConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_from_path_validates() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"[site]\nbase_url = \"not a url\"\n").unwrap();
        f.flush().unwrap();
        let err = load_from_path(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("base_url"));
    }

    #[test]
    fn load_from_path_reads_values() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"related_limit = 4\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.related_limit, 4);
    }
}
