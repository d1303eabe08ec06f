//! HTML structure helpers shared by the audit pipeline
//!
//! Pages are parsed with `scraper`; this module adds the small layer the
//! pipeline needs on top: locating one required element by selector (with a
//! loud error when it is absent) and scanning the metadata field list of a
//! detail page.

mod fields;

pub use fields::{extract_fields, FieldScan, FIELD_LIST_SELECTOR};

use crate::{PepscanError, Result};
use scraper::{ElementRef, Html, Selector};

/// Parses a CSS selector, mapping syntax errors to a crate error.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| PepscanError::Selector(css.to_string()))
}

/// Finds the first element matching a CSS selector in a document.
///
/// `context` names the document being searched, for the error message.
///
/// # Returns
///
/// * `Ok(ElementRef)` - The first matching element
/// * `Err(PepscanError::ElementNotFound)` - No element matched
pub fn locate<'a>(document: &'a Html, css: &str, context: &str) -> Result<ElementRef<'a>> {
    let parsed = selector(css)?;

    document
        .select(&parsed)
        .next()
        .ok_or_else(|| PepscanError::ElementNotFound {
            selector: css.to_string(),
            context: context.to_string(),
        })
}

/// Collects an element's text content, trimmed.
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_finds_element() {
        let html = r#"<html><body><section id="target">here</section></body></html>"#;
        let document = Html::parse_document(html);

        let element = locate(&document, "section#target", "test page").unwrap();
        assert_eq!(element_text(element), "here");
    }

    #[test]
    fn test_locate_reports_missing_element() {
        let html = r#"<html><body><div>nothing else</div></body></html>"#;
        let document = Html::parse_document(html);

        let result = locate(&document, "section#target", "test page");
        assert!(matches!(
            result,
            Err(PepscanError::ElementNotFound { selector, .. }) if selector == "section#target"
        ));
    }

    #[test]
    fn test_element_text_joins_and_trims() {
        let html = r#"<html><body><dt> Type<span class="colon">:</span> </dt></body></html>"#;
        let document = Html::parse_document(html);

        let element = locate(&document, "dt", "test page").unwrap();
        assert_eq!(element_text(element), "Type:");
    }
}
