//! `folio meta <slug>` – head tags for a project page.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::seo::{MetaTag, PageMeta, TagKind};
use folio_core::{find_by_slug, Catalog};

pub fn run_meta(catalog: &Catalog, cfg: &FolioConfig, slug: &str) -> Result<()> {
    let Some(project) = find_by_slug(catalog.records(), slug) else {
        println!("Project not found: {slug}");
        return Ok(());
    };
    for tag in PageMeta::for_project(&cfg.site, project).tags() {
        println!("{}", to_html(&tag));
    }
    Ok(())
}

fn to_html(tag: &MetaTag) -> String {
    let content = escape(&tag.content);
    match tag.kind {
        TagKind::Title => format!("<title>{content}</title>"),
        TagKind::Name => format!("<meta name=\"{}\" content=\"{content}\" />", tag.key),
        TagKind::Property => format!("<meta property=\"{}\" content=\"{content}\" />", tag.key),
        TagKind::Link => format!("<link rel=\"{}\" href=\"{content}\" />", tag.key),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_for_each_kind() {
        let tag = |kind, key, content: &str| MetaTag {
            kind,
            key,
            content: content.to_string(),
        };
        assert_eq!(
            to_html(&tag(TagKind::Title, "title", "A & B")),
            "<title>A &amp; B</title>"
        );
        assert_eq!(
            to_html(&tag(TagKind::Name, "robots", "index, follow")),
            "<meta name=\"robots\" content=\"index, follow\" />"
        );
        assert_eq!(
            to_html(&tag(TagKind::Property, "og:title", "\"x\"")),
            "<meta property=\"og:title\" content=\"&quot;x&quot;\" />"
        );
        assert_eq!(
            to_html(&tag(TagKind::Link, "canonical", "https://a.b/")),
            "<link rel=\"canonical\" href=\"https://a.b/\" />"
        );
    }
}
