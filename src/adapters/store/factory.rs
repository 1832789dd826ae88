//! Document store factory
//!
//! Builds a store client from a `[source]` or `[target]` section.

use crate::adapters::jsonl::JsonlStore;
use crate::adapters::postgresql::{PostgreSQLAdapter, PostgreSQLClient};
use crate::adapters::store::traits::DocumentStore;
use crate::config::schema::{StoreBackend, StoreConfig};
use crate::domain::{Result, ShroudError};
use std::sync::Arc;

/// Which end of the copy a store serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreRole {
    /// Read from; must already exist
    Source,
    /// Written to; created where the backend allows it
    Target,
}

impl std::fmt::Display for StoreRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Create a document store based on the configuration
///
/// # Errors
///
/// Returns an error if the backend sub-table is missing or the client cannot
/// be created.
pub async fn create_store(config: &StoreConfig, role: StoreRole) -> Result<Arc<dyn DocumentStore>> {
    match config.backend {
        StoreBackend::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                ShroudError::Configuration(format!("{role}.postgresql configuration is missing"))
            })?;

            tracing::info!(role = %role, "Creating PostgreSQL store");
            let client = PostgreSQLClient::new(pg_config.clone()).await?;
            Ok(Arc::new(PostgreSQLAdapter::new(client)) as Arc<dyn DocumentStore>)
        }
        StoreBackend::Jsonl => {
            let jsonl_config = config.jsonl.as_ref().ok_or_else(|| {
                ShroudError::Configuration(format!("{role}.jsonl configuration is missing"))
            })?;

            tracing::info!(role = %role, directory = %jsonl_config.directory.display(), "Creating JSON-lines store");
            let store = match role {
                StoreRole::Source => JsonlStore::new(&jsonl_config.directory),
                StoreRole::Target => JsonlStore::create_if_missing(&jsonl_config.directory),
            };
            Ok(Arc::new(store) as Arc<dyn DocumentStore>)
        }
    }
}
