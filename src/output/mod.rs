//! Result rendering
//!
//! The audit core hands over an ordered table of text rows; these renderers
//! decide how it reaches the operator:
//! - Plain rows on stdout (the default)
//! - An aligned, boxed table on stdout
//! - A CSV file in the results directory

mod file;
mod table;

pub use file::write_csv;
pub use table::render_table;

use crate::audit::ResultTable;
use crate::Result;
use std::path::Path;

/// How the result table is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Tab-separated rows on stdout
    Console,
    /// Aligned, boxed table on stdout
    Pretty,
    /// CSV file in the results directory
    File,
}

/// Emits the result table in the selected mode.
pub fn emit(table: &ResultTable, mode: OutputMode, results_dir: &Path) -> Result<()> {
    match mode {
        OutputMode::Console => {
            println!("{}", table.header.join("\t"));
            for row in &table.rows {
                println!("{}", row.join("\t"));
            }
        }
        OutputMode::Pretty => {
            print!("{}", render_table(table));
        }
        OutputMode::File => {
            let path = write_csv(table, results_dir)?;
            tracing::info!("Results saved to {}", path.display());
        }
    }

    Ok(())
}
