//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "shroud.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your source and target", self.output);
                println!("  2. Put credentials in a .env file (SHROUD_SOURCE_DSN, SHROUD_TARGET_DSN)");
                println!("  3. Check the field list: shroud validate-config");
                println!("  4. Try it without writing: shroud copy --dry-run");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Sample configuration with every section and its defaults
    pub fn sample_config() -> &'static str {
        r#"# Shroud configuration
#
# Copies collections from [source] to [target], replacing sensitive fields
# with synthetic values on the way.

[application]
# trace | debug | info | warn | error
log_level = "info"

# Anonymize everything but write nothing
dry_run = false

# ----------------------------------------------------------------------------
# Stores: backend = "postgresql" | "jsonl"
# ----------------------------------------------------------------------------
[source]
backend = "postgresql"

[source.postgresql]
connection_string = "${SHROUD_SOURCE_DSN}"
schema = "public"
# Column holding the JSON document in every collection table
document_column = "document"
max_connections = 10
connection_timeout_seconds = 30
statement_timeout_seconds = 60
# disable | prefer | require | verify-ca | verify-full
ssl_mode = "prefer"

[target]
backend = "jsonl"

[target.jsonl]
# One <collection>.jsonl file per collection
directory = "./anonymized"

# [target]
# backend = "postgresql"
#
# [target.postgresql]
# connection_string = "${SHROUD_TARGET_DSN}"

# ----------------------------------------------------------------------------
# Anonymization
# ----------------------------------------------------------------------------
[anonymization]
# Field names matched case-insensitively, at the top level or inside matched containers
default_fields = [
    "email", "name", "description", "address", "city",
    "country", "phone", "comment", "birthdate",
]

# Empty: use default_fields
# "+a,b": default_fields plus a and b
# "-a,b": default_fields without a and b
# anything else: replaces default_fields
#
# Entries are [collection.]field[:directive]. Directives:
#   faker.<category>.<method>   generated value, e.g. faker.internet.email
#   null | [] | {}              that exact value
#   [...] or {...}              URL-encoded JSON literal
#   any other text              that text
fields = ""

# Only "en" is supported
faker_locale = "en"

# ----------------------------------------------------------------------------
# Copy loop
# ----------------------------------------------------------------------------
[copy]
batch_size = 1000
# Empty = every collection in the source
collections = []
ignore_collections = []
# Drop a non-empty target collection before copying into it
drop_existing = false

# ----------------------------------------------------------------------------
# Logging
# ----------------------------------------------------------------------------
[logging]
local_enabled = true
local_path = "./logs"
# daily | hourly | never
local_rotation = "daily"
"#
    }
}
