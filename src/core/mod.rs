//! Core business logic for Shroud.
//!
//! - [`copy`] - copy orchestration, collection filtering and the run summary
//!
//! # Copy Workflow
//!
//! 1. **Connect**: test the source and target stores
//! 2. **Select**: list source collections and apply the include/ignore lists
//! 3. **Prepare**: optionally drop a non-empty target collection
//! 4. **Copy**: read a batch, anonymize it, write it, repeat until exhausted
//! 5. **Report**: log the copy summary
//!
//! # Example
//!
//! ```rust,no_run
//! use shroud::config::load_config;
//! use shroud::core::copy::CopyCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("shroud.toml")?;
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//! let coordinator = CopyCoordinator::new(config, shutdown_rx).await?;
//! let summary = coordinator.execute_copy().await?;
//!
//! println!("Copied {} documents", summary.documents_written);
//! # Ok(())
//! # }
//! ```

pub mod copy;
