// Shroud - anonymizing copy between document stores
// Copyright (c) 2025 Shroud Contributors
// Licensed under the MIT License

//! # Shroud - anonymizing copy between document stores
//!
//! Shroud copies collections of JSON-like documents from a source store to a
//! target store, replacing configured fields with synthetic values on the
//! way. Production data can then be used in development and test
//! environments without carrying personal data along.
//!
//! ## Overview
//!
//! - **Reading** collections batch by batch from PostgreSQL or a directory
//!   of JSON-lines files
//! - **Anonymizing** every field whose name is in the field list, at the top
//!   level or inside matched containers, with a generated value or a fixed
//!   replacement
//! - **Writing** the rewritten documents to the same-named target collection
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Copy orchestration
//! - [`anonymization`] - Field-list rules, directives, generators, transformer
//! - [`adapters`] - Document stores (PostgreSQL, JSON lines, memory)
//! - [`domain`] - Documents, identifiers, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shroud::config::load_config;
//! use shroud::core::copy::CopyCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("shroud.toml")?;
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//!     let coordinator = CopyCoordinator::new(config, shutdown_rx).await?;
//!     let summary = coordinator.execute_copy().await?;
//!
//!     println!("Copied {} documents", summary.documents_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Field Lists
//!
//! Each entry is `[collection.]field[:directive]`. Field names match
//! case-insensitively; a qualified entry applies only to that collection.
//! Nested fields are reached only through a container that is itself listed.
//!
//! ```rust
//! use shroud::anonymization::anonymize_batch;
//! use shroud::domain::{Document, Value};
//! use serde_json::json;
//!
//! let docs = vec![Document::try_from(json!({
//!     "Email": "ada@example.com",
//!     "profile": {"phone": "555-0100", "plan": "pro"},
//! })).unwrap()];
//!
//! let masked = anonymize_batch(&docs, "users", &["email", "profile", "users.phone:null"]).unwrap();
//!
//! assert_ne!(masked[0].get("Email"), Some(&Value::from("ada@example.com")));
//! let Some(Value::Object(profile)) = masked[0].get("profile") else { panic!() };
//! assert_eq!(profile.get("phone"), Some(&Value::Null));
//! assert_eq!(profile.get("plan"), Some(&Value::from("pro")));
//! ```
//!
//! ## Error Handling
//!
//! Library code returns [`domain::ShroudError`]. A directive that cannot be
//! resolved surfaces as [`domain::AnonymizationError`] and aborts the run:
//!
//! ```rust
//! use shroud::anonymization::anonymize_batch;
//! use shroud::domain::{AnonymizationError, Document};
//! use serde_json::json;
//!
//! let docs = vec![Document::try_from(json!({"email": "a@b.c"})).unwrap()];
//! let err = anonymize_batch(&docs, "users", &["email:faker.nope.email"]).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid faker category: nope");
//! assert!(matches!(err, AnonymizationError::Category { .. }));
//! ```

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
