//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Shroud using clap.

pub mod commands;

use crate::domain::ShroudError;
use clap::{Parser, Subcommand};

/// Exit code: success
pub const EXIT_OK: i32 = 0;
/// Exit code: stopped by a shutdown signal before all collections were copied
pub const EXIT_INTERRUPTED: i32 = 1;
/// Exit code: invalid configuration or field list
pub const EXIT_CONFIG: i32 = 2;
/// Exit code: a store could not be reached
pub const EXIT_CONNECTION: i32 = 4;
/// Exit code: any other failure
pub const EXIT_FATAL: i32 = 5;

/// Shroud - anonymizing copy between document stores
#[derive(Parser, Debug)]
#[command(name = "shroud")]
#[command(version, about, long_about = None)]
#[command(author = "Shroud Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "shroud.toml", env = "SHROUD_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHROUD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy collections from source to target, anonymizing configured fields
    Copy(commands::copy::CopyArgs),

    /// Validate configuration file and field-list directives
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Maps an error onto the process exit code
pub fn exit_code_for(error: &ShroudError) -> i32 {
    match error {
        ShroudError::Configuration(_)
        | ShroudError::Anonymization(_)
        | ShroudError::Validation(_) => EXIT_CONFIG,
        ShroudError::Connection(_) => EXIT_CONNECTION,
        _ => EXIT_FATAL,
    }
}
