//! Copy orchestration
//!
//! - [`filter`] - include/ignore lists over source collection names
//! - [`coordinator`] - the batch loop from source to target
//! - [`summary`] - run and per-collection counters

pub mod coordinator;
pub mod filter;
pub mod summary;

pub use coordinator::CopyCoordinator;
pub use filter::{CollectionFilter, SkipReason};
pub use summary::{CollectionStats, CopySummary};
