//! Validate config command implementation
//!
//! Loads and validates the configuration, then resolves every directive in
//! the effective field list so a bad selector or literal is reported before
//! any document is read.

use crate::anonymization::check_field_list;
use crate::cli::commands::copy::describe_store;
use crate::cli::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("OK   Configuration file loaded and validated");
                c
            }
            Err(e) => {
                println!("FAIL Configuration is invalid");
                println!("     Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let fields = config.anonymization.resolved_fields();
        let failures = check_field_list(&fields);

        if failures.is_empty() {
            println!("OK   All {} field-list entries resolve", fields.len());
        } else {
            println!("FAIL {} field-list entries do not resolve", failures.len());
            for (entry, error) in &failures {
                tracing::error!(entry = %entry, error = %error, "Invalid field-list directive");
                println!("     {entry}: {error}");
            }
        }

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Source: {}", describe_store(&config.source));
        println!("  Target: {}", describe_store(&config.target));
        println!("  Fields: {}", fields.join(","));
        println!("  Faker Locale: {}", config.anonymization.faker_locale);
        println!("  Batch Size: {}", config.copy.batch_size);
        if !config.copy.collections.is_empty() {
            println!("  Collections: {}", config.copy.collections.join(","));
        }
        if !config.copy.ignore_collections.is_empty() {
            println!("  Ignored: {}", config.copy.ignore_collections.join(","));
        }
        println!("  Drop Existing: {}", config.copy.drop_existing);
        println!();

        Ok(if failures.is_empty() { EXIT_OK } else { EXIT_CONFIG })
    }
}
