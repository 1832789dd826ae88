//! Configuration management for Shroud.
//!
//! `shroud.toml` is loaded with `${VAR_NAME}` substitution, `SHROUD_*`
//! environment overrides and per-section validation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shroud::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("shroud.toml")?;
//!
//! println!("Source backend: {}", config.source.backend);
//! println!("Fields: {:?}", config.anonymization.resolved_fields());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level and dry run
//! - [`StoreConfig`] - `[source]` and `[target]`, each selecting a backend
//! - [`AnonymizationConfig`] - default field list, `fields` modifier, locale
//! - [`CopyConfig`] - batch size, collection filters, drop-existing
//! - [`LoggingConfig`] - local rolling file output
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [source]
//! backend = "postgresql"
//!
//! [source.postgresql]
//! connection_string = "${SHROUD_SOURCE_DSN}"
//! schema = "public"
//!
//! [target]
//! backend = "jsonl"
//!
//! [target.jsonl]
//! directory = "./masked"
//!
//! [anonymization]
//! fields = "+users.ssn:***,orders.notes:null"
//!
//! [copy]
//! batch_size = 1000
//! ignore_collections = ["audit_log"]
//! ```

pub mod fields;
pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use crate::anonymization::config::AnonymizationConfig;
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, CopyConfig, JsonlConfig, LoggingConfig, PostgreSQLConfig, ShroudConfig,
    StoreBackend, StoreConfig,
};
pub use secret::{redact_connection_string, secret_string, SecretString, SecretValue};
