//! Error context extension trait
//!
//! Adds `.context()` / `.with_context()` to any `Result` whose error converts
//! into [`ShroudError`], keeping library code on the typed error instead of
//! `anyhow`.
//!
//! # Examples
//!
//! ```rust
//! use shroud::domain::Result;
//! use shroud::domain::context::ResultExt;
//!
//! fn read_collection(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read collection file: {}", path))
//! }
//!
//! assert!(read_collection("/definitely/not/here.jsonl").is_err());
//! ```

use crate::domain::errors::ShroudError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;

    /// Add context computed only when an error occurs
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

/// The wrapped error keeps its category; only the message gains the context
/// prefix. An anonymization failure stays an anonymization failure so callers
/// can still tell configuration defects apart from I/O problems.
impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ShroudError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| prefix(e.into(), &context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| prefix(e.into(), &f()))
    }
}

fn prefix(error: ShroudError, context: &dyn std::fmt::Display) -> ShroudError {
    match error {
        ShroudError::Configuration(msg) => ShroudError::Configuration(format!("{context}: {msg}")),
        ShroudError::Database(msg) => ShroudError::Database(format!("{context}: {msg}")),
        ShroudError::Storage(msg) => ShroudError::Storage(format!("{context}: {msg}")),
        ShroudError::Validation(msg) => ShroudError::Validation(format!("{context}: {msg}")),
        ShroudError::Connection(msg) => ShroudError::Connection(format!("{context}: {msg}")),
        ShroudError::Serialization(msg) => ShroudError::Serialization(format!("{context}: {msg}")),
        ShroudError::Io(msg) => ShroudError::Io(format!("{context}: {msg}")),
        ShroudError::Other(msg) => ShroudError::Other(format!("{context}: {msg}")),
        anonymization @ ShroudError::Anonymization(_) => anonymization,
    }
}
