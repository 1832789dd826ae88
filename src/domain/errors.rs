//! Domain error types
//!
//! This module defines the error hierarchy for Shroud. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Shroud error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ShroudError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A replacement directive could not be resolved
    #[error("Anonymization error: {0} (in `{}`)", .0.offending_text())]
    Anonymization(#[from] AnonymizationError),

    /// Database-related errors (connection pool, queries)
    #[error("Database error: {0}")]
    Database(String),

    /// Document store errors that are not database specific
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network/connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while resolving a replacement directive
///
/// Every variant points at a configuration defect. None of them is retried
/// or replaced by a default value: the copy run aborts instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnonymizationError {
    /// A `[`/`{` literal could not be URL-decoded or parsed as JSON
    #[error("Failed to parse replacement JSON: {message}")]
    Parse {
        /// The directive as written in the field list
        directive: String,
        /// Message reported by the decoder or JSON parser
        message: String,
    },

    /// A `faker...` directive does not have exactly three segments
    #[error("Invalid format for replacement: {directive}. Expected format 'faker.category.method'")]
    Format { directive: String },

    /// The generator category is not registered
    #[error("Invalid faker category: {category}")]
    Category { category: String },

    /// The method is not registered within a known category
    #[error("Invalid faker method: {method} in category {category}")]
    Method { method: String, category: String },
}

impl AnonymizationError {
    /// The directive or selector text that caused the failure
    pub fn offending_text(&self) -> &str {
        match self {
            Self::Parse { directive, .. } | Self::Format { directive } => directive,
            Self::Category { category } => category,
            Self::Method { method, .. } => method,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ShroudError {
    fn from(err: std::io::Error) -> Self {
        ShroudError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ShroudError {
    fn from(err: serde_json::Error) -> Self {
        ShroudError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ShroudError {
    fn from(err: toml::de::Error) -> Self {
        ShroudError::Configuration(format!("TOML parse error: {err}"))
    }
}
