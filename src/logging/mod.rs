//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted log files
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use shroud::logging::init_logging;
//! use shroud::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a collection copy
///
/// # Example
///
/// ```no_run
/// use shroud::log_collection_start;
///
/// log_collection_start!("users", 3);
/// ```
#[macro_export]
macro_rules! log_collection_start {
    ($collection:expr, $rule_count:expr) => {
        tracing::info!(
            collection = %$collection,
            rules = $rule_count,
            "Copying collection"
        );
    };
}

/// Log the completion of a collection copy
///
/// # Example
///
/// ```no_run
/// use shroud::log_collection_complete;
/// use std::time::Duration;
///
/// log_collection_complete!("users", 42, Duration::from_secs(10));
/// ```
#[macro_export]
macro_rules! log_collection_complete {
    ($collection:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            collection = %$collection,
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Collection copied"
        );
    };
}

/// Log a batch written to the target
///
/// # Example
///
/// ```no_run
/// use shroud::log_batch_written;
///
/// log_batch_written!("users", 3, 1000, 3000);
/// ```
#[macro_export]
macro_rules! log_batch_written {
    ($collection:expr, $batch:expr, $written:expr, $total:expr) => {
        tracing::debug!(
            collection = %$collection,
            batch = $batch,
            written = $written,
            total = $total,
            "Batch written"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use shroud::log_error_with_context;
/// use shroud::domain::ShroudError;
///
/// let error = ShroudError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// log_error_with_context!(&error, "users", directive = %"faker.x.y");
/// ```
///
/// Anything after the context is passed through as extra fields.
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
    ($error:expr, $context:expr, $($field:tt)+) => {
        tracing::error!(
            error = %$error,
            context = $context,
            $($field)+,
            "Error occurred"
        );
    };
}
