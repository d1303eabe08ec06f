//! The audit core
//!
//! This module contains the validation-and-aggregation pipeline:
//! - Numerical-index row parsing
//! - Cross-validation of index codes against detail-page declarations
//! - Per-status tallying with the sum-equals-total invariant
//! - The walker that drives fetch, extract, check and aggregate per row

mod checker;
mod index;
mod tally;
mod walker;

pub use checker::{check, Diagnostic, ProposalDetail};
pub use index::{parse_index, split_type_status, IndexRow, INDEX_SECTION_SELECTOR};
pub use tally::{StatusTally, SEED_STATUSES};
pub use walker::{run_audit, AuditReport, ResultTable, Walker};
