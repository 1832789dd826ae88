//! Copy command implementation
//!
//! Copies every selected collection from the source store to the target
//! store, anonymizing the configured fields on the way.

use crate::cli::{exit_code_for, EXIT_CONFIG, EXIT_INTERRUPTED, EXIT_OK};
use crate::config::loader::split_list;
use crate::config::{load_config, ShroudConfig, StoreConfig};
use crate::core::copy::{CopyCoordinator, CopySummary};
use clap::Args;
use std::path::Path;
use tokio::sync::watch;

/// Arguments for the copy command
#[derive(Args, Debug, Default)]
pub struct CopyArgs {
    /// Source location: postgres:// URI or JSON-lines directory
    #[arg(long, value_name = "URI")]
    pub source_uri: Option<String>,

    /// Target location: postgres:// URI or JSON-lines directory
    #[arg(long, value_name = "URI")]
    pub target_uri: Option<String>,

    /// Field list: `+a,b` appends, `-a,b` removes, anything else replaces
    #[arg(long, allow_hyphen_values = true)]
    pub fields: Option<String>,

    /// Only copy these collections (comma-separated)
    #[arg(long)]
    pub collections: Option<String>,

    /// Never copy these collections (comma-separated)
    #[arg(long)]
    pub ignore_collections: Option<String>,

    /// Documents per batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Drop non-empty target collections before copying
    #[arg(long)]
    pub drop_existing: bool,

    /// Anonymize without writing to the target
    #[arg(long)]
    pub dry_run: bool,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl CopyArgs {
    /// Execute the copy command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting copy command");

        let config = match self.build_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Configuration validation failed");
                eprintln!("Configuration validation failed: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let dry_run = config.application.dry_run;
        if dry_run {
            println!("DRY RUN MODE - documents are anonymized but not written");
            println!();
        }

        if !self.yes && !dry_run && !confirm(&config)? {
            println!("Copy cancelled.");
            return Ok(EXIT_OK);
        }

        let coordinator = match CopyCoordinator::new(config, shutdown_signal).await {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create copy coordinator");
                eprintln!("Failed to initialize copy: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let summary = match coordinator.execute_copy().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Copy failed");
                eprintln!("Copy failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        print_summary(&summary);

        let exit_code = if summary.interrupted {
            println!("Copy interrupted. Collections copied so far are complete up to their last batch.");
            tracing::info!("Copy interrupted by user signal");
            EXIT_INTERRUPTED
        } else {
            println!("Copy completed successfully.");
            EXIT_OK
        };

        Ok(exit_code)
    }

    /// Loads the configuration file and applies the command-line overrides
    ///
    /// Without a configuration file both `--source-uri` and `--target-uri`
    /// are required and every other setting takes its default.
    pub fn build_config(&self, config_path: &str) -> anyhow::Result<ShroudConfig> {
        let mut config = match (&self.source_uri, &self.target_uri) {
            (Some(source), Some(target)) if !Path::new(config_path).exists() => {
                tracing::info!(config_path = %config_path, "No configuration file, using defaults");
                ShroudConfig::from_uris(source, target)
            }
            _ => load_config(config_path)?,
        };

        if let Some(uri) = &self.source_uri {
            config.source = StoreConfig::from_uri(uri);
        }
        if let Some(uri) = &self.target_uri {
            config.target = StoreConfig::from_uri(uri);
        }

        if let Some(fields) = &self.fields {
            tracing::info!(fields = %fields, "Overriding field list from CLI");
            config.anonymization.fields = fields.clone();
        }

        if let Some(collections) = &self.collections {
            config.copy.collections = split_list(collections);
        }
        if let Some(ignore) = &self.ignore_collections {
            config.copy.ignore_collections = split_list(ignore);
        }
        if let Some(batch_size) = self.batch_size {
            config.copy.batch_size = batch_size;
        }

        if self.drop_existing {
            config.copy.drop_existing = true;
        }
        if self.dry_run {
            config.application.dry_run = true;
        }

        config.validate().map_err(anyhow::Error::msg)?;

        Ok(config)
    }
}

fn confirm(config: &ShroudConfig) -> anyhow::Result<bool> {
    use std::io::{self, Write};

    println!("Copy Configuration:");
    println!("  Source: {}", describe_store(&config.source));
    println!("  Target: {}", describe_store(&config.target));
    println!("  Fields: {}", config.anonymization.resolved_fields().join(","));
    println!(
        "  Collections: {}",
        if config.copy.collections.is_empty() {
            "All".to_string()
        } else {
            config.copy.collections.join(",")
        }
    );
    println!("  Batch size: {}", config.copy.batch_size);
    println!("  Drop existing: {}", config.copy.drop_existing);
    println!();
    print!("Proceed with copy? [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Human-readable store location with credentials masked
pub(crate) fn describe_store(store: &StoreConfig) -> String {
    use secrecy::ExposeSecret;

    match (&store.postgresql, &store.jsonl) {
        (Some(pg), _) if store.backend == crate::config::StoreBackend::PostgreSQL => format!(
            "postgresql {} (schema {})",
            crate::config::redact_connection_string(pg.connection_string.expose_secret().as_ref()),
            pg.schema
        ),
        (_, Some(jsonl)) => format!("jsonl {}", jsonl.directory.display()),
        _ => store.backend.to_string(),
    }
}

fn print_summary(summary: &CopySummary) {
    println!();
    println!("Copy Summary:");
    println!("  Collections copied: {}", summary.collections_processed);
    println!("  Collections skipped: {}", summary.collections_skipped);
    println!("  Documents read: {}", summary.documents_read);
    println!("  Documents written: {}", summary.documents_written);
    println!("  Batches: {}", summary.batches);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    for stats in &summary.collections {
        println!(
            "    - {}: {} documents{}{}",
            stats.collection,
            stats.documents_written,
            if stats.passthrough { " (no matching fields)" } else { "" },
            if stats.dropped_existing { " (target dropped first)" } else { "" },
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_args_defaults() {
        let args = CopyArgs::default();
        assert!(!args.yes);
        assert!(!args.dry_run);
        assert!(args.fields.is_none());
        assert!(args.batch_size.is_none());
    }

    #[test]
    fn test_build_config_from_uris_without_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let args = CopyArgs {
            source_uri: Some("postgres://app:pw@db:5432/prod".to_string()),
            target_uri: Some(dir.path().join("out").to_string_lossy().to_string()),
            fields: Some("+ssn".to_string()),
            collections: Some("users, orders".to_string()),
            batch_size: Some(50),
            dry_run: true,
            ..Default::default()
        };

        let config = args.build_config(missing.to_str().unwrap()).unwrap();

        assert_eq!(config.source.backend, crate::config::StoreBackend::PostgreSQL);
        assert_eq!(config.target.backend, crate::config::StoreBackend::Jsonl);
        assert_eq!(config.copy.collections, vec!["users", "orders"]);
        assert_eq!(config.copy.batch_size, 50);
        assert!(config.application.dry_run);
        assert_eq!(
            config.anonymization.resolved_fields().last().map(String::as_str),
            Some("ssn")
        );
    }

    #[test]
    fn test_build_config_requires_file_without_both_uris() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let args = CopyArgs {
            source_uri: Some("./in".to_string()),
            ..Default::default()
        };

        assert!(args.build_config(missing.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_build_config_rejects_zero_batch_size() {
        let args = CopyArgs {
            source_uri: Some("./in".to_string()),
            target_uri: Some("./out".to_string()),
            batch_size: Some(0),
            ..Default::default()
        };

        let err = args.build_config("/nonexistent/shroud.toml").unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }

    #[test]
    fn test_describe_store_masks_password() {
        let store = StoreConfig::from_uri("postgres://app:hunter2@db:5432/prod");
        let description = describe_store(&store);
        assert!(!description.contains("hunter2"));
        assert!(description.contains("schema public"));
    }
}
