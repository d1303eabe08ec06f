//! CSV file output

use crate::audit::ResultTable;
use crate::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp format used in result filenames.
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Writes the result table as CSV into the results directory, creating the
/// directory if needed.
///
/// # Returns
///
/// The path of the written file, named `pep_audit_<timestamp>.csv`.
pub fn write_csv(table: &ResultTable, results_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(results_dir)?;

    let timestamp = Local::now().format(FILE_TIMESTAMP_FORMAT);
    let path = results_dir.join(format!("pep_audit_{}.csv", timestamp));

    let mut content = String::new();
    content.push_str(&csv_line(&table.header));
    for row in &table.rows {
        content.push_str(&csv_line(row));
    }

    fs::write(&path, content)?;
    Ok(path)
}

fn csv_line(cells: &[String]) -> String {
    let mut line = cells
        .iter()
        .map(|cell| csv_field(cell))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Quotes a field when it contains a delimiter, quote, or newline.
fn csv_field(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
