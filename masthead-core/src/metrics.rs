//! Catalog counters.
//!
//! Lightweight per-catalog counters, readable at any time through
//! [`CatalogCounters::snapshot`]. Query methods take `&self`, so the counters
//! are atomics rather than plain integers.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ValidationError;

/// Atomic counters for catalog events.
#[derive(Debug)]
pub struct CatalogCounters {
    /// Authors created.
    pub authors_created: AtomicU64,
    /// Magazines created.
    pub magazines_created: AtomicU64,
    /// Articles created, through either construction path.
    pub articles_created: AtomicU64,
    /// Constructor and setter calls rejected by validation.
    pub validations_rejected: AtomicU64,
    /// Successful author or magazine reassignments on an article.
    pub reassignments: AtomicU64,
    /// Aggregate query calls, one per call even on an empty list.
    pub query_scans: AtomicU64,
}

impl CatalogCounters {
    /// Create a new set of zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            authors_created: AtomicU64::new(0),
            magazines_created: AtomicU64::new(0),
            articles_created: AtomicU64::new(0),
            validations_rejected: AtomicU64::new(0),
            reassignments: AtomicU64::new(0),
            query_scans: AtomicU64::new(0),
        }
    }

    /// Count a rejected operation and log why.
    pub fn record_rejection(&self, err: &ValidationError) {
        self.validations_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(error = %err, "Validation rejected");
    }

    /// Snapshot all counters for export.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            authors_created: self.authors_created.load(Ordering::Relaxed),
            magazines_created: self.magazines_created.load(Ordering::Relaxed),
            articles_created: self.articles_created.load(Ordering::Relaxed),
            validations_rejected: self.validations_rejected.load(Ordering::Relaxed),
            reassignments: self.reassignments.load(Ordering::Relaxed),
            query_scans: self.query_scans.load(Ordering::Relaxed),
        }
    }
}

impl Default for CatalogCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Increment a counter by one.
pub(crate) fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

/// A snapshot of counter values at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    /// Authors created.
    pub authors_created: u64,
    /// Magazines created.
    pub magazines_created: u64,
    /// Articles created.
    pub articles_created: u64,
    /// Rejected constructor and setter calls.
    pub validations_rejected: u64,
    /// Successful reassignments.
    pub reassignments: u64,
    /// Aggregate query scans run.
    pub query_scans: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_increments() {
        let counters = CatalogCounters::new();
        bump(&counters.authors_created);
        bump(&counters.authors_created);
        counters.record_rejection(&ValidationError::InvalidCategory);

        let snap = counters.snapshot();
        assert_eq!(snap.authors_created, 2);
        assert_eq!(snap.validations_rejected, 1);
        assert_eq!(snap.articles_created, 0);
    }
}
