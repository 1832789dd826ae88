//! In-memory document store
//!
//! Used as the sink for dry runs and as a source or target in tests.

use crate::adapters::store::traits::{DocumentCursor, DocumentStore, WriteResult};
use crate::domain::{Document, Result, ShroudError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Collections held in a sorted map
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `collections`
    pub fn with_collections<I, S>(collections: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Document>)>,
        S: Into<String>,
    {
        let collections = collections
            .into_iter()
            .map(|(name, documents)| (name.into(), documents))
            .collect();
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Snapshot of a collection's documents
    pub fn documents(&self, collection: &str) -> Result<Option<Vec<Document>>> {
        Ok(self.read()?.get(collection).cloned())
    }

    /// Number of documents in a collection (0 if missing)
    pub fn count(&self, collection: &str) -> Result<usize> {
        Ok(self.read()?.get(collection).map_or(0, Vec::len))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Vec<Document>>>> {
        self.collections
            .read()
            .map_err(|_| ShroudError::Storage("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Vec<Document>>>> {
        self.collections
            .write()
            .map_err(|_| ShroudError::Storage("memory store lock poisoned".to_string()))
    }
}

/// Cursor over a snapshot taken when it was opened
struct MemoryCursor {
    documents: std::vec::IntoIter<Document>,
}

#[async_trait]
impl DocumentCursor for MemoryCursor {
    async fn next_batch(&mut self, max: usize) -> Result<Vec<Document>> {
        Ok(self.documents.by_ref().take(max).collect())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn test_connection(&self) -> Result<()> {
        self.read().map(|_| ())
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        Ok(self.read()?.keys().cloned().collect())
    }

    async fn open_cursor(&self, collection: &str) -> Result<Box<dyn DocumentCursor>> {
        let documents = self.documents(collection)?.ok_or_else(|| {
            ShroudError::Storage(format!("Collection not found: {collection}"))
        })?;
        Ok(Box::new(MemoryCursor {
            documents: documents.into_iter(),
        }))
    }

    async fn write_batch(&self, collection: &str, documents: Vec<Document>) -> Result<WriteResult> {
        let written = documents.len();
        self.write()?
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
        Ok(WriteResult { written })
    }

    async fn drop_collection_if_non_empty(&self, collection: &str) -> Result<bool> {
        let mut collections = self.write()?;
        match collections.get(collection) {
            Some(documents) if !documents.is_empty() => {
                collections.remove(collection);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
