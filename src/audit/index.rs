//! Numerical-index parsing

use crate::html::{element_text, locate, selector};
use crate::{PepscanError, Result};
use scraper::{ElementRef, Html};

/// Selector for the section holding the proposal index table.
pub const INDEX_SECTION_SELECTOR: &str = "section#numerical-index";

/// One entry of the registry's numerical index.
///
/// `type_code` and `status_code` come from the row's compound code cell;
/// `detail_url` is relative to the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub type_code: String,
    pub status_code: String,
    pub number: String,
    pub detail_url: String,
}

/// Splits the compound type/status cell into its two codes.
///
/// A two-character cell is one letter of each; anything else is all type
/// code with an empty status code.
///
/// ```
/// use pepscan::audit::split_type_status;
///
/// assert_eq!(split_type_status("SF"), ("S".to_string(), "F".to_string()));
/// assert_eq!(split_type_status("I"), ("I".to_string(), String::new()));
/// assert_eq!(split_type_status(""), (String::new(), String::new()));
/// ```
pub fn split_type_status(compound: &str) -> (String, String) {
    let chars: Vec<char> = compound.chars().collect();
    if chars.len() == 2 {
        (chars[0].to_string(), chars[1].to_string())
    } else {
        (compound.to_string(), String::new())
    }
}

/// Parses the index page body into its rows, header row excluded.
///
/// Rows missing the two leading cells or the detail link come back as `Err`
/// entries in place, so the caller can log and skip them without losing
/// document order. The outer error fires only when the index section itself
/// cannot be located.
pub fn parse_index(body: &str) -> Result<Vec<Result<IndexRow>>> {
    let document = Html::parse_document(body);
    let section = locate(&document, INDEX_SECTION_SELECTOR, "registry index")?;

    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;
    let link_selector = selector("a")?;

    let mut rows = Vec::new();

    for (position, row) in section.select(&row_selector).skip(1).enumerate() {
        let position = position + 1;
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();

        if cells.len() < 2 {
            rows.push(Err(PepscanError::MalformedRow {
                position,
                reason: format!("expected at least 2 cells, found {}", cells.len()),
            }));
            continue;
        }

        let link = match cells[1]
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            Some(href) => href,
            None => {
                rows.push(Err(PepscanError::MalformedRow {
                    position,
                    reason: "number cell has no detail link".to_string(),
                }));
                continue;
            }
        };

        let (type_code, status_code) = split_type_status(&element_text(cells[0]));

        rows.push(Ok(IndexRow {
            type_code,
            status_code,
            number: element_text(cells[1]),
            detail_url: link.to_string(),
        }));
    }

    Ok(rows)
}
