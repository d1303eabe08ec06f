//! Aligned text-table rendering

use crate::audit::ResultTable;

/// Renders the table as an aligned, boxed grid.
///
/// ```text
/// +--------+-------+
/// | Status | Count |
/// +--------+-------+
/// | Final  | 274   |
/// +--------+-------+
/// ```
pub fn render_table(table: &ResultTable) -> String {
    let widths = column_widths(table);
    let separator = render_separator(&widths);

    let mut out = String::new();
    out.push_str(&separator);
    out.push_str(&render_row(&table.header, &widths));
    out.push_str(&separator);
    for row in &table.rows {
        out.push_str(&render_row(row, &widths));
    }
    out.push_str(&separator);
    out
}

fn column_widths(table: &ResultTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.header.iter().map(|cell| cell.len()).collect();

    for row in &table.rows {
        for (column, cell) in row.iter().enumerate() {
            if column >= widths.len() {
                widths.push(cell.len());
            } else if cell.len() > widths[column] {
                widths[column] = cell.len();
            }
        }
    }

    widths
}

fn render_separator(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (column, &width) in widths.iter().enumerate() {
        let cell = cells.get(column).map(String::as_str).unwrap_or("");
        line.push_str(&format!(" {:<1$} |", cell, width));
    }
    line.push('\n');
    line
}
