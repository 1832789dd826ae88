//! Document store abstraction layer
//!
//! This module provides a trait-based abstraction over the stores Shroud
//! copies between, so the copy pipeline never depends on a concrete backend.

pub mod factory;
pub mod traits;

pub use factory::{create_store, StoreRole};
pub use traits::{DocumentCursor, DocumentStore, WriteResult};
