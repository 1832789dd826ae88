//! Copy coordinator - main orchestrator for the copy process
//!
//! Reads every selected source collection in batches, anonymizes each batch
//! and writes it to the same-named target collection. Batches are processed
//! strictly in sequence; a shutdown signal is honoured between batches.

use crate::adapters::memory::MemoryStore;
use crate::adapters::store::{create_store, DocumentStore, StoreRole};
use crate::anonymization::Anonymizer;
use crate::config::ShroudConfig;
use crate::core::copy::filter::CollectionFilter;
use crate::core::copy::summary::{CollectionStats, CopySummary};
use crate::domain::context::ResultExt;
use crate::domain::{CollectionName, Result, ShroudError};
use crate::{log_batch_written, log_collection_complete, log_collection_start, log_error_with_context};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Copy coordinator
pub struct CopyCoordinator {
    source: Arc<dyn DocumentStore>,
    target: Arc<dyn DocumentStore>,
    field_list: Vec<String>,
    filter: CollectionFilter,
    batch_size: usize,
    drop_existing: bool,
    dry_run: bool,
    shutdown_rx: watch::Receiver<bool>,
}

impl CopyCoordinator {
    /// Create a new copy coordinator
    ///
    /// Builds both stores from the configuration. A dry run never opens the
    /// target; documents go to an in-memory sink instead.
    pub async fn new(config: ShroudConfig, shutdown_rx: watch::Receiver<bool>) -> Result<Self> {
        let source = create_store(&config.source, StoreRole::Source).await?;

        let target: Arc<dyn DocumentStore> = if config.application.dry_run {
            tracing::info!("Dry run: anonymized documents are discarded");
            Arc::new(MemoryStore::new())
        } else {
            create_store(&config.target, StoreRole::Target).await?
        };

        Ok(Self::with_stores(&config, source, target, shutdown_rx))
    }

    /// Create a coordinator over already-built stores
    pub fn with_stores(
        config: &ShroudConfig,
        source: Arc<dyn DocumentStore>,
        target: Arc<dyn DocumentStore>,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            source,
            target,
            field_list: config.anonymization.resolved_fields(),
            filter: CollectionFilter::from_config(&config.copy),
            batch_size: config.copy.batch_size,
            drop_existing: config.copy.drop_existing,
            dry_run: config.application.dry_run,
            shutdown_rx,
        }
    }

    /// The effective field list every collection's rules are parsed from
    pub fn field_list(&self) -> &[String] {
        &self.field_list
    }

    /// Execute the copy
    ///
    /// 1. Tests both connections
    /// 2. Lists and filters the source collections
    /// 3. For each collection: optionally drops the existing target, then
    ///    reads, anonymizes and writes batch by batch
    /// 4. Generates the summary
    ///
    /// # Errors
    ///
    /// Any store or anonymization error aborts the run. Batches already
    /// written stay in the target.
    pub async fn execute_copy(&self) -> Result<CopySummary> {
        let start_time = Instant::now();
        let mut summary = CopySummary {
            dry_run: self.dry_run,
            ..CopySummary::new()
        };

        tracing::info!(
            source = %self.source.describe(),
            target = %self.target.describe(),
            batch_size = self.batch_size,
            fields = self.field_list.len(),
            "Starting copy process"
        );

        self.source
            .test_connection()
            .await
            .context("Source store is not reachable")?;
        self.target
            .test_connection()
            .await
            .context("Target store is not reachable")?;

        let collections = self.source.list_collections().await?;
        for missing in self.filter.missing_from(&collections) {
            tracing::warn!(collection = %missing, "Selected collection does not exist in the source");
        }

        tracing::info!(count = collections.len(), "Found source collections");

        for collection in &collections {
            if let Some(reason) = self.filter.skip_reason(collection) {
                tracing::debug!(collection = %collection, reason = %reason, "Skipping collection");
                summary.record_skipped();
                continue;
            }

            let name = match CollectionName::new(collection.as_str()) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!(collection = %collection, error = %e, "Skipping collection");
                    summary.record_skipped();
                    continue;
                }
            };

            if self.shutdown_requested() {
                summary.interrupted = true;
                break;
            }

            let stats = self.copy_collection(name).await?;
            summary.record_collection(stats);

            if summary.interrupted {
                break;
            }
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }

    /// Copy one collection batch by batch
    async fn copy_collection(&self, name: CollectionName) -> Result<CollectionStats> {
        let collection = name.as_str().to_string();
        let started = Instant::now();
        let mut stats = CollectionStats::new(collection.as_str());

        let anonymizer = Anonymizer::for_collection(name, &self.field_list);
        stats.passthrough = anonymizer.is_noop();

        log_collection_start!(&collection, anonymizer.rules().len());

        if self.drop_existing {
            stats.dropped_existing = self
                .target
                .drop_collection_if_non_empty(&collection)
                .await
                .with_context(|| format!("Failed to drop target collection {collection}"))?;
        }

        let mut cursor = self
            .source
            .open_cursor(&collection)
            .await
            .with_context(|| format!("Failed to open source collection {collection}"))?;

        loop {
            if self.shutdown_requested() {
                tracing::warn!(
                    collection = %collection,
                    documents_written = stats.documents_written,
                    "Shutdown requested, stopping after the last completed batch"
                );
                stats.interrupted = true;
                break;
            }

            let batch = cursor
                .next_batch(self.batch_size)
                .await
                .with_context(|| format!("Failed to read from {collection}"))?;
            if batch.is_empty() {
                break;
            }
            stats.documents_read += batch.len();

            let anonymized = anonymizer.anonymize_batch(&batch).map_err(|e| {
                log_error_with_context!(&e, collection.as_str(), directive = %e.offending_text());
                ShroudError::from(e)
            })?;

            let result = self
                .target
                .write_batch(&collection, anonymized)
                .await
                .with_context(|| format!("Failed to write to {collection}"))?;

            stats.documents_written += result.written;
            stats.batches += 1;

            log_batch_written!(&collection, stats.batches, result.written, stats.documents_written);
        }

        log_collection_complete!(&collection, stats.documents_written, started.elapsed());

        Ok(stats)
    }

    fn shutdown_requested(&self) -> bool {
        *self.shutdown_rx.borrow()
    }
}
