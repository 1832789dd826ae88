//! Domain models and types for Shroud.
//!
//! The domain layer provides:
//! - **Documents** ([`Document`], [`Value`]) with deterministic field order
//! - **Strongly-typed identifiers** ([`CollectionName`])
//! - **Error types** ([`ShroudError`], [`AnonymizationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ShroudError>`]. Directive
//! failures raised by the anonymization engine convert with `?`:
//!
//! ```rust
//! use shroud::domain::{AnonymizationError, Result};
//!
//! fn example() -> Result<()> {
//!     let failure = AnonymizationError::Category { category: "nope".to_string() };
//!     Err(failure)?
//! }
//!
//! assert!(example().is_err());
//! ```

pub mod context;
pub mod document;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use document::{Document, Value};
pub use errors::{AnonymizationError, ShroudError};
pub use ids::CollectionName;
pub use result::Result;
