//! Copy summary and reporting

use std::time::Duration;

/// Per-collection counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub collection: String,
    pub documents_read: usize,
    pub documents_written: usize,
    pub batches: usize,
    /// The target collection was non-empty and dropped first
    pub dropped_existing: bool,
    /// No rule applied, documents were copied unchanged
    pub passthrough: bool,
    /// Stopped by a shutdown signal before the cursor was exhausted
    pub interrupted: bool,
}

impl CollectionStats {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Default::default()
        }
    }
}

/// Summary of a copy run
#[derive(Debug, Clone, Default)]
pub struct CopySummary {
    /// Collections copied (fully or up to an interruption)
    pub collections_processed: usize,

    /// Collections excluded by the include/ignore lists
    pub collections_skipped: usize,

    pub documents_read: usize,
    pub documents_written: usize,
    pub batches: usize,
    pub duration: Duration,

    /// A shutdown signal stopped the run between batches
    pub interrupted: bool,

    /// Dry run: nothing reached the target store
    pub dry_run: bool,

    pub collections: Vec<CollectionStats>,
}

impl CopySummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Fold one collection's counters into the totals
    pub fn record_collection(&mut self, stats: CollectionStats) {
        self.collections_processed += 1;
        self.documents_read += stats.documents_read;
        self.documents_written += stats.documents_written;
        self.batches += stats.batches;
        self.interrupted |= stats.interrupted;
        self.collections.push(stats);
    }

    pub fn record_skipped(&mut self) {
        self.collections_skipped += 1;
    }

    /// Every read document was written and the run was not interrupted
    pub fn is_complete(&self) -> bool {
        !self.interrupted && self.documents_read == self.documents_written
    }

    /// Documents per second over the whole run
    pub fn throughput(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.documents_written as f64 / secs
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            collections_processed = self.collections_processed,
            collections_skipped = self.collections_skipped,
            documents_read = self.documents_read,
            documents_written = self.documents_written,
            batches = self.batches,
            duration_ms = self.duration.as_millis() as u64,
            docs_per_sec = format!("{:.1}", self.throughput()),
            dry_run = self.dry_run,
            "Copy completed"
        );

        if self.interrupted {
            tracing::warn!(
                collections_processed = self.collections_processed,
                "Copy was interrupted; target collections may be partially written"
            );
        }
    }
}
