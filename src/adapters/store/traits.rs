//! Document store abstraction traits
//!
//! This module defines the traits that store adapters must implement to act
//! as a copy source or target.

use crate::domain::{Document, Result};
use async_trait::async_trait;

/// Result of writing one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteResult {
    /// Number of documents written
    pub written: usize,
}

/// Sequential reader over one collection
///
/// A cursor is forward-only and cannot be restarted. Once it returns an empty
/// batch it is exhausted.
#[async_trait]
pub trait DocumentCursor: Send {
    /// Reads up to `max` documents
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails or a stored record is
    /// not a document.
    async fn next_batch(&mut self, max: usize) -> Result<Vec<Document>>;
}

/// Store client trait for document collections
///
/// Implemented by every backend the copy pipeline can read from or write to.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Test the store connection
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable.
    async fn test_connection(&self) -> Result<()>;

    /// Names of all collections, sorted
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// Opens a cursor positioned at the first document of `collection`
    ///
    /// # Errors
    ///
    /// Returns an error if the collection does not exist.
    async fn open_cursor(&self, collection: &str) -> Result<Box<dyn DocumentCursor>>;

    /// Appends documents to `collection`, creating it if missing
    ///
    /// A batch is written completely or, where the backend supports it, not
    /// at all.
    async fn write_batch(&self, collection: &str, documents: Vec<Document>) -> Result<WriteResult>;

    /// Drops `collection` if it exists and holds at least one document
    ///
    /// Returns `true` if it was dropped.
    async fn drop_collection_if_non_empty(&self, collection: &str) -> Result<bool>;

    /// Human-readable location with credentials redacted
    fn describe(&self) -> String;
}
