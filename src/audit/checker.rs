//! Cross-validation of index codes against detail-page declarations

use crate::audit::index::IndexRow;
use crate::expect::ExpectationTable;
use crate::Result;
use std::fmt;

/// Authoritative metadata declared on a proposal's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalDetail {
    pub declared_type: String,
    pub declared_status: String,
}

/// A recorded expectation/observation mismatch.
///
/// Diagnostics are the product of the audit, not failures of it: they are
/// logged and collected, and never interrupt the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    TypeMismatch {
        number: String,
        observed: String,
        expected: String,
    },
    StatusMismatch {
        number: String,
        observed: String,
        expected: Vec<String>,
    },
}

impl Diagnostic {
    /// Number of the proposal the mismatch was observed on.
    pub fn number(&self) -> &str {
        match self {
            Diagnostic::TypeMismatch { number, .. } => number,
            Diagnostic::StatusMismatch { number, .. } => number,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::TypeMismatch {
                number,
                observed,
                expected,
            } => write!(
                f,
                "PEP {}: card declares type {:?}, expected {:?}",
                number, observed, expected
            ),
            Diagnostic::StatusMismatch {
                number,
                observed,
                expected,
            } => write!(
                f,
                "PEP {}: card declares status {:?}, expected one of: {}",
                number,
                observed,
                expected.join(", ")
            ),
        }
    }
}

/// Checks one proposal's declared type and status against the table.
///
/// Both expectation lookups run before any comparison, so an unknown code
/// aborts with a configuration error before any diagnostic is considered.
/// The declared type must equal the one name registered for the type code;
/// the declared status must be a member of the set registered for the
/// status code.
pub fn check(
    row: &IndexRow,
    detail: &ProposalDetail,
    table: &ExpectationTable,
) -> Result<Vec<Diagnostic>> {
    let expected_type = table.expected_type_name(&row.type_code)?;
    let expected_statuses = table.expected_status_names(&row.status_code)?;

    let mut diagnostics = Vec::new();

    if detail.declared_type != expected_type {
        diagnostics.push(Diagnostic::TypeMismatch {
            number: row.number.clone(),
            observed: detail.declared_type.clone(),
            expected: expected_type.to_string(),
        });
    }

    if !expected_statuses.contains(&detail.declared_status) {
        diagnostics.push(Diagnostic::StatusMismatch {
            number: row.number.clone(),
            observed: detail.declared_status.clone(),
            expected: expected_statuses.to_vec(),
        });
    }

    Ok(diagnostics)
}
