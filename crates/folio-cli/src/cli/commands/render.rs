//! Plain-text rendering shared by the listing commands.

use folio_core::card::{project_path, tech_preview};
use folio_core::ProjectRecord;

/// One line per project: slug, category, title and technology preview.
pub(super) fn card_line(record: &ProjectRecord, max_techs: usize) -> String {
    let preview = tech_preview(record, max_techs);
    let mut techs = preview.shown.join(", ");
    if let Some(badge) = preview.overflow_badge() {
        if !techs.is_empty() {
            techs.push(' ');
        }
        techs.push_str(&badge);
    }
    let star = if record.featured { "*" } else { " " };
    format!(
        "{star} {:<22} {:<10} {}  [{}]  {}",
        record.slug,
        record.category,
        record.title,
        techs,
        project_path(record)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Catalog;

    #[test]
    fn card_line_has_overflow_badge() {
        let catalog = Catalog::bundled().unwrap();
        let shop = &catalog.records()[0];
        let line = card_line(shop, 3);
        assert!(line.starts_with("* ecommerce-platform"));
        assert!(line.contains("[React, Node.js, MongoDB +2]"));
        assert!(line.ends_with("/project/ecommerce-platform"));
    }
}
