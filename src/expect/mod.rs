//! Expected type and status names for proposal codes
//!
//! The numerical index abbreviates each proposal's type and status to one
//! letter; the detail pages spell them out. This table records which full
//! texts each letter may legitimately render as, so the audit can flag any
//! page that drifts from its index entry.

use crate::{PepscanError, Result};
use std::collections::HashMap;

/// Immutable lookup table from one-letter codes to expected full texts.
///
/// Built once at startup and passed by reference into the checker, never
/// kept as ambient global state, so tests can substitute their own tables.
///
/// Every code observed in the index must have a registered entry; a missing
/// entry is a configuration error and aborts the run.
#[derive(Debug, Clone)]
pub struct ExpectationTable {
    types: HashMap<String, String>,
    statuses: HashMap<String, Vec<String>>,
}

impl ExpectationTable {
    /// Creates a table from explicit mappings.
    pub fn new(types: HashMap<String, String>, statuses: HashMap<String, Vec<String>>) -> Self {
        Self { types, statuses }
    }

    /// The table the registry is audited against.
    ///
    /// A status code may legitimately render as more than one text; the
    /// empty status code is a registered entry in its own right (proposals
    /// whose index cell carries only a type letter).
    ///
    /// ```
    /// use pepscan::expect::ExpectationTable;
    ///
    /// let table = ExpectationTable::builtin();
    /// assert_eq!(table.expected_type_name("S").unwrap(), "Standards Track");
    /// ```
    pub fn builtin() -> Self {
        let types = [
            ("I", "Informational"),
            ("P", "Process"),
            ("S", "Standards Track"),
        ]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();

        let statuses: HashMap<String, Vec<String>> = [
            ("A", &["Active", "Accepted"][..]),
            ("D", &["Deferred"][..]),
            ("F", &["Final"][..]),
            ("P", &["Provisional"][..]),
            ("R", &["Rejected"][..]),
            ("S", &["Superseded"][..]),
            ("W", &["Withdrawn"][..]),
            ("", &["Draft", "Active"][..]),
        ]
        .into_iter()
        .map(|(code, names)| {
            (
                code.to_string(),
                names.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect();

        Self { types, statuses }
    }

    /// Looks up the single full-text type name expected for a type code.
    pub fn expected_type_name(&self, code: &str) -> Result<&str> {
        self.types
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| PepscanError::UnknownTypeCode {
                code: code.to_string(),
            })
    }

    /// Looks up the set of acceptable status texts for a status code.
    pub fn expected_status_names(&self, code: &str) -> Result<&[String]> {
        self.statuses
            .get(code)
            .map(Vec::as_slice)
            .ok_or_else(|| PepscanError::UnknownStatusCode {
                code: code.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_type_lookups() {
        let table = ExpectationTable::builtin();
        assert_eq!(table.expected_type_name("I").unwrap(), "Informational");
        assert_eq!(table.expected_type_name("P").unwrap(), "Process");
        assert_eq!(table.expected_type_name("S").unwrap(), "Standards Track");
    }

    #[test]
    fn test_builtin_status_lookups() {
        let table = ExpectationTable::builtin();
        assert_eq!(
            table.expected_status_names("A").unwrap(),
            &["Active".to_string(), "Accepted".to_string()]
        );
        assert_eq!(
            table.expected_status_names("F").unwrap(),
            &["Final".to_string()]
        );
    }

    #[test]
    fn test_empty_status_code_is_registered() {
        let table = ExpectationTable::builtin();
        let names = table.expected_status_names("").unwrap();
        assert!(names.contains(&"Draft".to_string()));
        assert!(names.contains(&"Active".to_string()));
    }

    #[test]
    fn test_unknown_type_code_is_an_error() {
        let table = ExpectationTable::builtin();
        let result = table.expected_type_name("X");
        assert!(matches!(
            result,
            Err(PepscanError::UnknownTypeCode { code }) if code == "X"
        ));
    }

    #[test]
    fn test_unknown_status_code_is_an_error() {
        let table = ExpectationTable::builtin();
        let result = table.expected_status_names("Z");
        assert!(matches!(
            result,
            Err(PepscanError::UnknownStatusCode { code }) if code == "Z"
        ));
    }

    #[test]
    fn test_unregistered_empty_code_is_an_error_not_a_pass() {
        let table = ExpectationTable::new(HashMap::new(), HashMap::new());
        assert!(matches!(
            table.expected_status_names(""),
            Err(PepscanError::UnknownStatusCode { code }) if code.is_empty()
        ));
    }
}
