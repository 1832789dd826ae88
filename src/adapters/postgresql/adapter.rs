//! PostgreSQL adapter implementing the document store traits

use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::store::traits::{DocumentCursor, DocumentStore, WriteResult};
use crate::domain::{Document, Result, ShroudError};
use async_trait::async_trait;
use std::sync::Arc;

/// PostgreSQL implementation of [`DocumentStore`]
///
/// A collection is a table in the configured schema. Tables without the
/// document column are not treated as collections.
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgreSQLClient> {
        &self.client
    }

    async fn table_exists(&self, collection: &str) -> Result<bool> {
        let rows = self
            .client
            .query(
                "SELECT 1 FROM information_schema.tables WHERE table_schema::text = $1 AND table_name::text = $2",
                &[&self.client.schema(), &collection],
            )
            .await?;
        Ok(!rows.is_empty())
    }
}

/// Keyset cursor over one table, ordered by `id`
struct PostgreSQLCursor {
    client: Arc<PostgreSQLClient>,
    page_sql: String,
    last_id: i64,
    exhausted: bool,
}

#[async_trait]
impl DocumentCursor for PostgreSQLCursor {
    async fn next_batch(&mut self, max: usize) -> Result<Vec<Document>> {
        if self.exhausted || max == 0 {
            return Ok(Vec::new());
        }

        let limit = i64::try_from(max).unwrap_or(i64::MAX);
        let rows = self
            .client
            .query(&self.page_sql, &[&self.last_id, &limit])
            .await?;

        if rows.len() < max {
            self.exhausted = true;
        }

        let mut batch = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row
                .try_get(0)
                .map_err(|e| ShroudError::Database(format!("Failed to read id column: {}", e)))?;
            let value: serde_json::Value = row.try_get(1).map_err(|e| {
                ShroudError::Serialization(format!("Row {id}: failed to read document: {e}"))
            })?;
            let document = Document::try_from(value)
                .map_err(|e| ShroudError::Serialization(format!("Row {id}: {e}")))?;

            self.last_id = id;
            batch.push(document);
        }

        Ok(batch)
    }
}

#[async_trait]
impl DocumentStore for PostgreSQLAdapter {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let rows = self
            .client
            .query(
                "SELECT table_name::text FROM information_schema.columns \
                 WHERE table_schema::text = $1 AND column_name::text = $2 \
                 ORDER BY table_name",
                &[&self.client.schema(), &self.client.document_column_name()],
            )
            .await?;

        rows.iter()
            .map(|row| {
                row.try_get::<_, String>(0)
                    .map_err(|e| ShroudError::Database(format!("Failed to read table name: {}", e)))
            })
            .collect()
    }

    async fn open_cursor(&self, collection: &str) -> Result<Box<dyn DocumentCursor>> {
        if !self.table_exists(collection).await? {
            return Err(ShroudError::Storage(format!(
                "Collection not found: {}",
                self.client.qualified_table(collection)
            )));
        }

        Ok(Box::new(PostgreSQLCursor {
            client: Arc::clone(&self.client),
            page_sql: self.client.page_sql(collection),
            last_id: 0,
            exhausted: false,
        }))
    }

    async fn write_batch(&self, collection: &str, documents: Vec<Document>) -> Result<WriteResult> {
        self.client
            .execute(&self.client.create_table_sql(collection), &[])
            .await?;

        if documents.is_empty() {
            return Ok(WriteResult::default());
        }

        let mut connection = self.client.get_connection().await?;
        let transaction = connection
            .transaction()
            .await
            .map_err(|e| ShroudError::Database(format!("Failed to begin transaction: {}", e)))?;

        transaction
            .batch_execute(&format!(
                "SET LOCAL statement_timeout = {}",
                self.client.statement_timeout_ms()
            ))
            .await
            .map_err(|e| ShroudError::Database(format!("Failed to set statement timeout: {}", e)))?;

        let statement = transaction
            .prepare(&self.client.insert_sql(collection))
            .await
            .map_err(|e| ShroudError::Database(format!("Failed to prepare insert: {}", e)))?;

        let written = documents.len();
        for document in documents {
            let value = serde_json::Value::from(document);
            transaction
                .execute(&statement, &[&value])
                .await
                .map_err(|e| ShroudError::Database(format!("Insert failed: {}", e)))?;
        }

        transaction
            .commit()
            .await
            .map_err(|e| ShroudError::Database(format!("Failed to commit batch: {}", e)))?;

        tracing::debug!(
            table = %self.client.qualified_table(collection),
            written,
            "Batch committed"
        );

        Ok(WriteResult { written })
    }

    async fn drop_collection_if_non_empty(&self, collection: &str) -> Result<bool> {
        if !self.table_exists(collection).await? {
            return Ok(false);
        }

        let table = self.client.qualified_table(collection);
        let rows = self
            .client
            .query(&format!("SELECT 1 FROM {table} LIMIT 1"), &[])
            .await?;
        if rows.is_empty() {
            return Ok(false);
        }

        self.client
            .execute(&format!("DROP TABLE {table}"), &[])
            .await?;
        tracing::info!(table = %table, "Dropped existing table");
        Ok(true)
    }

    fn describe(&self) -> String {
        format!(
            "{} (schema {})",
            self.client.connection_string_safe(),
            self.client.schema()
        )
    }
}
