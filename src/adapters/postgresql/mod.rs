//! PostgreSQL document store
//!
//! Each collection is a table with a `BIGSERIAL id` and a `json` document
//! column. `json` keeps the original key order, which `jsonb` would not.

pub mod adapter;
pub mod client;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
