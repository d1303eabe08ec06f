//! pepscan: an auditor for the Python Enhancement Proposal index
//!
//! This crate crawls the PEP numerical index, fetches every proposal's detail
//! page, and cross-checks the declared type and status texts against the
//! one-letter codes the index abbreviates them to. Mismatches are surfaced as
//! diagnostics; per-status counts are tallied into a result table.

pub mod audit;
pub mod config;
pub mod expect;
pub mod fetch;
pub mod html;
pub mod output;

use thiserror::Error;

/// Main error type for pepscan operations
#[derive(Debug, Error)]
pub enum PepscanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} fetching {url}")]
    Fetch { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Page cache error: {0}")]
    Cache(#[from] rusqlite::Error),

    #[error("Invalid selector `{0}`")]
    Selector(String),

    #[error("No element matching `{selector}` in {context}")]
    ElementNotFound { selector: String, context: String },

    #[error("PEP {number}: field list has no {label} entry")]
    MissingField { number: String, label: &'static str },

    #[error("Index row {position}: {reason}")]
    MalformedRow { position: usize, reason: String },

    #[error("No expected type name registered for code {code:?}")]
    UnknownTypeCode { code: String },

    #[error("No expected status names registered for code {code:?}")]
    UnknownStatusCode { code: String },

    #[error("Status tally out of sync: counts sum to {sum}, but {total} rows were aggregated")]
    TallyMismatch { sum: u64, total: u64 },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for pepscan operations
pub type Result<T> = std::result::Result<T, PepscanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use audit::{run_audit, AuditReport, Diagnostic, IndexRow, ResultTable, StatusTally};
pub use config::Config;
pub use expect::ExpectationTable;
pub use fetch::Fetcher;
