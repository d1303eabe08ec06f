//! Metadata field-list scanning for detail pages

use crate::html::{element_text, locate, selector};
use crate::Result;
use scraper::{ElementRef, Html};

/// Selector for the RFC-2822-style field list declaring a proposal's
/// metadata as label/value pairs.
pub const FIELD_LIST_SELECTOR: &str = "dl.rfc2822.field-list.simple";

/// Declared metadata texts scanned from a proposal's field list.
///
/// A `None` field means the list exists but carries no such label. That is
/// not the same as empty text; callers must treat it as not-found instead of
/// comparing blank data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldScan {
    pub declared_type: Option<String>,
    pub declared_status: Option<String>,
}

/// Scans a detail document's field list for the declared Type and Status.
///
/// Labels are matched by substring ("Type" / "Status", case-sensitive,
/// anywhere in the label), in document order, and a later match overwrites
/// an earlier one. The value is the label's next element sibling.
///
/// # Returns
///
/// * `Ok(FieldScan)` - The scan result; either field may be absent
/// * `Err(PepscanError::ElementNotFound)` - The field list itself is missing
pub fn extract_fields(document: &Html) -> Result<FieldScan> {
    let field_list = locate(document, FIELD_LIST_SELECTOR, "detail page")?;
    let labels = selector("dt")?;

    let mut scan = FieldScan::default();

    for label in field_list.select(&labels) {
        let value = match label.next_siblings().find_map(ElementRef::wrap) {
            Some(element) => element,
            None => continue,
        };

        let label_text = element_text(label);
        if label_text.contains("Type") {
            scan.declared_type = Some(element_text(value));
        }
        if label_text.contains("Status") {
            scan.declared_status = Some(element_text(value));
        }
    }

    Ok(scan)
}
