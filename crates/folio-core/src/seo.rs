//! Page metadata (title, description, Open Graph and Twitter tags).
//!
//! Read-only consumer of project records: nothing here writes back to the
//! catalog. Site-wide defaults come from the `[site]` config section.

use serde::{Deserialize, Serialize};

use crate::card::project_path;
use crate::catalog::ProjectRecord;

/// Site-wide metadata defaults (`[site]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Appended to page titles: `"<page> | <site_title>"`.
    pub site_title: String,
    pub default_title: String,
    pub default_description: String,
    pub default_keywords: String,
    pub default_image: String,
    /// Absolute origin used for canonical and og:url.
    pub base_url: String,
    pub author: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Developer Portfolio".to_string(),
            default_title: "Portfolio - Full Stack Developer".to_string(),
            default_description: "Professional portfolio of a full stack developer \
                                  specialised in React, Node.js and modern web applications."
                .to_string(),
            default_keywords: "developer, portfolio, React, Node.js, web development, full stack"
                .to_string(),
            default_image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085"
                .to_string(),
            base_url: "https://portfolio.example.com".to_string(),
            author: "Your Name".to_string(),
        }
    }
}

impl SiteConfig {
    /// Absolute URL of a site path.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// `title` unchanged if it already names the site, else suffixed with it.
    pub fn full_title(&self, title: &str) -> String {
        if title.contains(&self.site_title) {
            title.to_string()
        } else {
            format!("{title} | {}", self.site_title)
        }
    }
}

/// Kind of a head element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Title,
    /// `<meta name=...>`
    Name,
    /// `<meta property=...>`
    Property,
    /// `<link rel=...>`
    Link,
}

/// One head element: kind, key (name/property/rel) and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub kind: TagKind,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn new(kind: TagKind, key: &'static str, content: impl Into<String>) -> Self {
        Self {
            kind,
            key,
            content: content.into(),
        }
    }
}

/// Resolved metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,
    pub url: String,
    pub author: String,
}

impl PageMeta {
    /// Static page (home, about, projects, contact). `None` fields use site defaults.
    pub fn for_page(
        site: &SiteConfig,
        title: Option<&str>,
        description: Option<&str>,
        path: &str,
    ) -> Self {
        Self {
            title: site.full_title(title.unwrap_or(site.default_title.as_str())),
            description: description.unwrap_or(site.default_description.as_str()).to_string(),
            keywords: site.default_keywords.clone(),
            image: site.default_image.clone(),
            url: site.url_for(path),
            author: site.author.clone(),
        }
    }

    /// Project detail page.
    pub fn for_project(site: &SiteConfig, record: &ProjectRecord) -> Self {
        let keywords = if record.technologies.is_empty() {
            "project, portfolio, development".to_string()
        } else {
            format!(
                "{}, project, portfolio, development",
                record.technologies.join(", ")
            )
        };
        let image = if record.image.is_empty() {
            site.default_image.clone()
        } else {
            record.image.clone()
        };
        Self {
            title: site.full_title(&record.title),
            description: record.description.clone(),
            keywords,
            image,
            url: site.url_for(&project_path(record)),
            author: site.author.clone(),
        }
    }

    /// Head elements in emission order.
    pub fn tags(&self) -> Vec<MetaTag> {
        use TagKind::*;
        vec![
            MetaTag::new(Title, "title", &self.title),
            MetaTag::new(Name, "description", &self.description),
            MetaTag::new(Name, "keywords", &self.keywords),
            MetaTag::new(Property, "og:type", "website"),
            MetaTag::new(Property, "og:url", &self.url),
            MetaTag::new(Property, "og:title", &self.title),
            MetaTag::new(Property, "og:description", &self.description),
            MetaTag::new(Property, "og:image", &self.image),
            MetaTag::new(Property, "twitter:card", "summary_large_image"),
            MetaTag::new(Property, "twitter:url", &self.url),
            MetaTag::new(Property, "twitter:title", &self.title),
            MetaTag::new(Property, "twitter:description", &self.description),
            MetaTag::new(Property, "twitter:image", &self.image),
            MetaTag::new(Name, "author", &self.author),
            MetaTag::new(Name, "robots", "index, follow"),
            MetaTag::new(Link, "canonical", &self.url),
        ]
    }
}
