//! Per-status running counts

use crate::{PepscanError, Result};

/// Status names seeded into every tally at zero, so the final report lists
/// them even when no proposal carries them.
pub const SEED_STATUSES: [&str; 9] = [
    "Active",
    "Accepted",
    "Deferred",
    "Final",
    "Provisional",
    "Rejected",
    "Superseded",
    "Withdrawn",
    "Draft",
];

/// Running status counts for one audit run.
///
/// Insertion order is preserved: the seed set first, then unseen status
/// texts in order of first sight, which keeps reports deterministic.
///
/// Counts and the processed total move in lockstep; `record` is the only
/// mutation and bumps both, so `sum(counts) == total_processed` holds at
/// every point between calls.
#[derive(Debug, Clone)]
pub struct StatusTally {
    counts: Vec<(String, u64)>,
    total_processed: u64,
}

impl StatusTally {
    /// Creates a tally seeded with the known status names at zero.
    pub fn new() -> Self {
        Self {
            counts: SEED_STATUSES
                .iter()
                .map(|status| (status.to_string(), 0))
                .collect(),
            total_processed: 0,
        }
    }

    /// Records one processed proposal under the given status text.
    ///
    /// Any text is accepted, not just the seeded set; an unseen text gets
    /// an entry starting at 1.
    pub fn record(&mut self, status: &str) {
        match self.counts.iter_mut().find(|entry| entry.0 == status) {
            Some(entry) => entry.1 += 1,
            None => self.counts.push((status.to_string(), 1)),
        }
        self.total_processed += 1;
    }

    /// Number of proposals recorded so far.
    pub fn total_processed(&self) -> u64 {
        self.total_processed
    }

    /// Consumes the tally into report rows: one per status in insertion
    /// order, then a trailing `Total` row.
    ///
    /// The sum-equals-total postcondition is checked here; a violation is a
    /// programming error surfaced as `TallyMismatch`, since it would mean a
    /// row was partially processed.
    pub fn finalize(self) -> Result<Vec<(String, u64)>> {
        let sum: u64 = self.counts.iter().map(|entry| entry.1).sum();
        if sum != self.total_processed {
            return Err(PepscanError::TallyMismatch {
                sum,
                total: self.total_processed,
            });
        }

        let mut rows = self.counts;
        rows.push(("Total".to_string(), self.total_processed));
        Ok(rows)
    }
}

impl Default for StatusTally {
    fn default() -> Self {
        Self::new()
    }
}
