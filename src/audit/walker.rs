//! Audit orchestration
//!
//! The walker drives the whole pipeline: it fetches the numerical index,
//! then for every row fetches the proposal's detail page, extracts the
//! declared metadata, checks it against the expectation table, and folds the
//! status into the tally. Rows are processed strictly in document order,
//! one at a time.

use crate::audit::checker::{check, Diagnostic, ProposalDetail};
use crate::audit::index::{parse_index, IndexRow};
use crate::audit::tally::StatusTally;
use crate::expect::ExpectationTable;
use crate::fetch::Fetcher;
use crate::html::extract_fields;
use crate::{PepscanError, Result};
use scraper::Html;
use url::Url;

/// Result table handed to the output renderers: a header row first, then
/// fixed-width rows of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Outcome of a completed audit run.
#[derive(Debug)]
pub struct AuditReport {
    /// Per-status counts plus the trailing Total row.
    pub table: ResultTable,

    /// Every mismatch observed during the run.
    pub diagnostics: Vec<Diagnostic>,

    /// Rows fully processed and aggregated.
    pub rows_processed: u64,

    /// Rows skipped over a row-local failure.
    pub rows_skipped: u64,
}

/// Walks the proposal index and audits every row.
pub struct Walker<'a> {
    fetcher: &'a Fetcher,
    expectations: &'a ExpectationTable,
}

impl<'a> Walker<'a> {
    /// Creates a walker over the given collaborators.
    pub fn new(fetcher: &'a Fetcher, expectations: &'a ExpectationTable) -> Self {
        Self {
            fetcher,
            expectations,
        }
    }

    /// Runs the audit over the registry index at `index_url`.
    ///
    /// Failure to fetch the index or locate its table aborts the run with
    /// no result. Row-local failures (detail fetch, malformed row, missing
    /// field list or field) are logged, the row is skipped, and it is
    /// excluded from every count. Unknown codes and tally violations are
    /// fatal.
    pub async fn run(&self, index_url: &Url) -> Result<AuditReport> {
        tracing::info!("Fetching proposal index from {}", index_url);
        let body = self.fetcher.fetch(index_url).await?;
        let entries = parse_index(&body)?;
        let total_rows = entries.len();
        tracing::info!("Index lists {} rows", total_rows);

        let mut tally = StatusTally::new();
        let mut diagnostics = Vec::new();
        let mut skipped: u64 = 0;
        let start_time = std::time::Instant::now();

        for (position, entry) in entries.into_iter().enumerate() {
            let row = match entry {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!("Skipping malformed index row: {}", e);
                    skipped += 1;
                    continue;
                }
            };

            match self.audit_row(index_url, &row).await {
                Ok((detail, mut row_diagnostics)) => {
                    for diagnostic in &row_diagnostics {
                        tracing::warn!("{}", diagnostic);
                    }
                    diagnostics.append(&mut row_diagnostics);
                    tally.record(&detail.declared_status);
                }
                Err(e) if is_row_local(&e) => {
                    tracing::warn!("Skipping PEP {}: {}", row.number, e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }

            if (position + 1) % 50 == 0 {
                let rate = (position + 1) as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {}/{} rows, {:.2} rows/sec",
                    position + 1,
                    total_rows,
                    rate
                );
            }
        }

        let rows_processed = tally.total_processed();
        let rows = tally
            .finalize()?
            .into_iter()
            .map(|(status, count)| vec![status, count.to_string()])
            .collect();

        tracing::info!(
            "Audit complete: {} rows aggregated, {} skipped, {} mismatches in {:?}",
            rows_processed,
            skipped,
            diagnostics.len(),
            start_time.elapsed()
        );

        Ok(AuditReport {
            table: ResultTable {
                header: vec!["Status".to_string(), "Count".to_string()],
                rows,
            },
            diagnostics,
            rows_processed,
            rows_skipped: skipped,
        })
    }

    /// Audits a single row: fetch, extract, check.
    ///
    /// The caller records the tally only on success, so a failure anywhere
    /// here leaves the row out of every count.
    async fn audit_row(
        &self,
        index_url: &Url,
        row: &IndexRow,
    ) -> Result<(ProposalDetail, Vec<Diagnostic>)> {
        let detail_url = index_url.join(&row.detail_url)?;
        let body = self.fetcher.fetch(&detail_url).await?;
        let detail = scan_detail(&body, &row.number)?;
        let diagnostics = check(row, &detail, self.expectations)?;
        Ok((detail, diagnostics))
    }
}

/// Scans a detail page body into its declared metadata.
///
/// A field list lacking the Type or Status label fails here, loudly, rather
/// than letting blank text reach the checker.
fn scan_detail(body: &str, number: &str) -> Result<ProposalDetail> {
    let document = Html::parse_document(body);
    let scan = extract_fields(&document)?;

    let declared_type = match scan.declared_type {
        Some(text) => text,
        None => {
            return Err(PepscanError::MissingField {
                number: number.to_string(),
                label: "Type",
            })
        }
    };

    let declared_status = match scan.declared_status {
        Some(text) => text,
        None => {
            return Err(PepscanError::MissingField {
                number: number.to_string(),
                label: "Status",
            })
        }
    };

    Ok(ProposalDetail {
        declared_type,
        declared_status,
    })
}

/// Whether an error skips just the row it occurred on.
///
/// Everything else (unknown codes, tally violations, cache failures) is
/// fatal and aborts the run.
fn is_row_local(error: &PepscanError) -> bool {
    matches!(
        error,
        PepscanError::Http { .. }
            | PepscanError::Fetch { .. }
            | PepscanError::ElementNotFound { .. }
            | PepscanError::MissingField { .. }
            | PepscanError::UrlParse(_)
    )
}

/// Runs the audit pipeline over a registry index URL.
///
/// This is the crate's main entry point: fetch the index, audit every row,
/// and return the result table with the collected diagnostics.
///
/// # Example
///
/// ```no_run
/// use pepscan::audit::run_audit;
/// use pepscan::config::FetchConfig;
/// use pepscan::expect::ExpectationTable;
/// use pepscan::fetch::Fetcher;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = Fetcher::new(&FetchConfig::default())?;
/// let expectations = ExpectationTable::builtin();
/// let index_url = Url::parse("https://peps.python.org/")?;
///
/// let report = run_audit(&fetcher, &expectations, &index_url).await?;
/// println!("{} rows audited", report.rows_processed);
/// # Ok(())
/// # }
/// ```
pub async fn run_audit(
    fetcher: &Fetcher,
    expectations: &ExpectationTable,
    index_url: &Url,
) -> Result<AuditReport> {
    Walker::new(fetcher, expectations).run(index_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_detail_requires_type() {
        let body = r#"<html><body><dl class="rfc2822 field-list simple">
            <dt>Status:</dt><dd>Final</dd>
        </dl></body></html>"#;

        let result = scan_detail(body, "12");
        assert!(matches!(
            result,
            Err(PepscanError::MissingField { number, label: "Type" }) if number == "12"
        ));
    }

    #[test]
    fn test_scan_detail_requires_status() {
        let body = r#"<html><body><dl class="rfc2822 field-list simple">
            <dt>Type:</dt><dd>Process</dd>
        </dl></body></html>"#;

        let result = scan_detail(body, "12");
        assert!(matches!(
            result,
            Err(PepscanError::MissingField { label: "Status", .. })
        ));
    }

    #[test]
    fn test_scan_detail_returns_both_fields() {
        let body = r#"<html><body><dl class="rfc2822 field-list simple">
            <dt>Type:</dt><dd>Standards Track</dd>
            <dt>Status:</dt><dd>Final</dd>
        </dl></body></html>"#;

        let detail = scan_detail(body, "1").unwrap();
        assert_eq!(detail.declared_type, "Standards Track");
        assert_eq!(detail.declared_status, "Final");
    }

    #[test]
    fn test_fetch_errors_are_row_local() {
        assert!(is_row_local(&PepscanError::Fetch {
            url: "https://example.com/".to_string(),
            status: 404,
        }));
        assert!(is_row_local(&PepscanError::MissingField {
            number: "1".to_string(),
            label: "Type",
        }));
    }

    #[test]
    fn test_configuration_errors_are_fatal() {
        assert!(!is_row_local(&PepscanError::UnknownTypeCode {
            code: "X".to_string(),
        }));
        assert!(!is_row_local(&PepscanError::TallyMismatch { sum: 1, total: 2 }));
    }
}
