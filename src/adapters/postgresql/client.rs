//! PostgreSQL client implementation
//!
//! Owns the connection pool and the SQL for the one-table-per-collection
//! layout: each collection is a table in the configured schema with a
//! `BIGSERIAL id` and a `json` document column.

use crate::config::schema::PostgreSQLConfig;
use crate::config::secret::redact_connection_string;
use crate::domain::{Result, ShroudError};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use postgres_native_tls::MakeTlsConnector;
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::config::SslMode;
use tokio_postgres::tls::{MakeTlsConnect, TlsConnect};
use tokio_postgres::{NoTls, Row, Socket};

/// Quotes an SQL identifier, doubling embedded quotes
pub fn quote_ident(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// PostgreSQL client for Shroud
///
/// Provides connection pooling and the table operations used by the store
/// adapter.
pub struct PostgreSQLClient {
    /// Connection pool
    pool: Pool,

    /// Configuration
    config: PostgreSQLConfig,
}

impl PostgreSQLClient {
    /// Create a new PostgreSQL client
    ///
    /// No connection is opened until the pool is first used.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string cannot be parsed, TLS cannot
    /// be set up, or the pool cannot be built.
    pub async fn new(config: PostgreSQLConfig) -> Result<Self> {
        let mut pg_config: tokio_postgres::Config = config
            .connection_string
            .expose_secret()
            .as_ref()
            .parse()
            .map_err(|e| {
                ShroudError::Configuration(format!("Invalid PostgreSQL connection string: {}", e))
            })?;

        pg_config.ssl_mode(ssl_mode(&config.ssl_mode));

        let pool = if config.ssl_mode == "disable" {
            build_pool(pg_config, NoTls, &config)?
        } else {
            let connector = native_tls::TlsConnector::builder()
                .danger_accept_invalid_certs(!config.ssl_mode.starts_with("verify-"))
                .danger_accept_invalid_hostnames(config.ssl_mode != "verify-full")
                .build()
                .map_err(|e| ShroudError::Configuration(format!("Failed to set up TLS: {}", e)))?;
            build_pool(pg_config, MakeTlsConnector::new(connector), &config)?
        };

        Ok(Self { pool, config })
    }

    /// Test the connection to PostgreSQL
    pub async fn test_connection(&self) -> Result<()> {
        let client = self.get_connection().await?;

        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| ShroudError::Connection(format!("Connection test failed: {}", e)))?;

        tracing::info!(target_db = %self.connection_string_safe(), "PostgreSQL connection test successful");
        Ok(())
    }

    /// Get a connection from the pool
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be obtained.
    pub async fn get_connection(&self) -> Result<deadpool_postgres::Object> {
        self.pool
            .get()
            .await
            .map_err(|e| ShroudError::Connection(format!("Failed to get connection from pool: {}", e)))
    }

    /// Execute a query and return rows
    pub async fn query(
        &self,
        query: &str,
        params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<Vec<Row>> {
        let client = self.get_connection().await?;
        self.set_statement_timeout(&client).await?;

        client
            .query(query, params)
            .await
            .map_err(|e| ShroudError::Database(format!("Query failed: {}", e)))
    }

    /// Execute a statement and return the number of affected rows
    pub async fn execute(
        &self,
        statement: &str,
        params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<u64> {
        let client = self.get_connection().await?;
        self.set_statement_timeout(&client).await?;

        client
            .execute(statement, params)
            .await
            .map_err(|e| ShroudError::Database(format!("Statement execution failed: {}", e)))
    }

    async fn set_statement_timeout(&self, client: &deadpool_postgres::Object) -> Result<()> {
        let timeout_query = format!(
            "SET statement_timeout = {}",
            self.config.statement_timeout_seconds * 1000
        );
        client
            .execute(&timeout_query, &[])
            .await
            .map_err(|e| ShroudError::Database(format!("Failed to set statement timeout: {}", e)))?;
        Ok(())
    }

    /// `"schema"."table"` for a collection
    pub fn qualified_table(&self, collection: &str) -> String {
        format!("{}.{}", quote_ident(&self.config.schema), quote_ident(collection))
    }

    /// Quoted document column
    pub fn document_column(&self) -> String {
        quote_ident(&self.config.document_column)
    }

    /// Configured schema name
    pub fn schema(&self) -> &str {
        &self.config.schema
    }

    /// Configured document column name (unquoted)
    pub fn document_column_name(&self) -> &str {
        &self.config.document_column
    }

    /// Statement timeout in milliseconds
    pub fn statement_timeout_ms(&self) -> u64 {
        self.config.statement_timeout_seconds * 1000
    }

    /// DDL creating a collection table
    pub fn create_table_sql(&self, collection: &str) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (id BIGSERIAL PRIMARY KEY, {} json NOT NULL)",
            self.qualified_table(collection),
            self.document_column()
        )
    }

    /// Keyset page query: `$1` is the last id seen, `$2` the page size
    pub fn page_sql(&self, collection: &str) -> String {
        format!(
            "SELECT id, {col} FROM {table} WHERE id > $1 ORDER BY id LIMIT $2",
            col = self.document_column(),
            table = self.qualified_table(collection)
        )
    }

    /// Insert statement for one document
    pub fn insert_sql(&self, collection: &str) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES ($1)",
            self.qualified_table(collection),
            self.document_column()
        )
    }

    /// Get the connection string with the password masked
    pub fn connection_string_safe(&self) -> String {
        redact_connection_string(self.config.connection_string.expose_secret().as_ref())
    }

    /// Get the pool statistics
    pub fn pool_status(&self) -> deadpool_postgres::Status {
        self.pool.status()
    }
}

fn ssl_mode(mode: &str) -> SslMode {
    match mode {
        "disable" => SslMode::Disable,
        "allow" | "prefer" => SslMode::Prefer,
        _ => SslMode::Require,
    }
}

fn build_pool<T>(pg_config: tokio_postgres::Config, tls: T, config: &PostgreSQLConfig) -> Result<Pool>
where
    T: MakeTlsConnect<Socket> + Clone + Sync + Send + 'static,
    T::Stream: Sync + Send,
    T::TlsConnect: Sync + Send,
    <T::TlsConnect as TlsConnect<Socket>>::Future: Send,
{
    let manager = Manager::from_config(
        pg_config,
        tls,
        ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        },
    );

    let timeout = Some(Duration::from_secs(config.connection_timeout_seconds));
    Pool::builder(manager)
        .max_size(config.max_connections)
        .wait_timeout(timeout)
        .create_timeout(timeout)
        .recycle_timeout(timeout)
        .runtime(deadpool_postgres::Runtime::Tokio1)
        .build()
        .map_err(|e| ShroudError::Database(format!("Failed to create connection pool: {}", e)))
}
