//! Data store integrations for Shroud.
//!
//! - [`store`] - `DocumentStore` / `DocumentCursor` traits and the factory
//! - [`postgresql`] - one table per collection, documents in a `json` column
//! - [`jsonl`] - a directory with one `<collection>.jsonl` file per collection
//! - [`memory`] - in-process store for dry runs and tests
//!
//! # Design Pattern
//!
//! Adapters isolate storage dependencies behind traits so the copy pipeline
//! can run against any pair of backends, including in-memory ones in tests.
//!
//! ```rust,no_run
//! use shroud::adapters::store::{create_store, StoreRole};
//! use shroud::config::StoreConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::from_uri("./exports");
//! let store = create_store(&config, StoreRole::Source).await?;
//!
//! for collection in store.list_collections().await? {
//!     let mut cursor = store.open_cursor(&collection).await?;
//!     let first = cursor.next_batch(10).await?;
//!     println!("{collection}: {} documents in first batch", first.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod jsonl;
pub mod memory;
pub mod postgresql;
pub mod store;
