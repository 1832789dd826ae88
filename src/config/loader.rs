//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ShroudConfig;
use crate::domain::errors::ShroudError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ShroudConfig
/// 4. Applies environment variable overrides (SHROUD_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`ShroudError::Configuration`] if the file cannot be read or
/// parsed, a referenced environment variable is not set, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use shroud::config::loader::load_config;
///
/// let config = load_config("shroud.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ShroudConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ShroudError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ShroudError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration text, applying the same steps as [`load_config`]
pub fn parse_config(contents: &str) -> Result<ShroudConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ShroudConfig = toml::from_str(&contents)
        .map_err(|e| ShroudError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ShroudError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ShroudError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ShroudError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Parses a boolean override, rejecting anything but `true`/`false`
fn parse_bool(name: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .map_err(|_| ShroudError::Configuration(format!("Invalid {name} value: '{value}'")))
}

/// Applies environment variable overrides using the SHROUD_* prefix
///
/// Variables follow the pattern SHROUD_<SECTION>_<KEY>, for example
/// SHROUD_COPY_BATCH_SIZE or SHROUD_SOURCE_POSTGRESQL_CONNECTION_STRING.
fn apply_env_overrides(config: &mut ShroudConfig) -> Result<()> {
    use crate::config::secret_string;

    // Application overrides
    if let Ok(val) = std::env::var("SHROUD_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("SHROUD_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_bool("SHROUD_APPLICATION_DRY_RUN", &val)?;
    }

    // Store overrides (only for the sub-table that is present)
    for (prefix, store) in [("SHROUD_SOURCE", &mut config.source), ("SHROUD_TARGET", &mut config.target)] {
        if let Some(ref mut pg) = store.postgresql {
            if let Ok(val) = std::env::var(format!("{prefix}_POSTGRESQL_CONNECTION_STRING")) {
                pg.connection_string = secret_string(val);
            }
            if let Ok(val) = std::env::var(format!("{prefix}_POSTGRESQL_SCHEMA")) {
                pg.schema = val;
            }
        }
        if let Some(ref mut jsonl) = store.jsonl {
            if let Ok(val) = std::env::var(format!("{prefix}_JSONL_DIRECTORY")) {
                jsonl.directory = val.into();
            }
        }
    }

    // Anonymization overrides
    config.anonymization.apply_env_overrides();

    // Copy overrides
    if let Ok(val) = std::env::var("SHROUD_COPY_BATCH_SIZE") {
        config.copy.batch_size = val.parse().map_err(|_| {
            ShroudError::Configuration(format!("Invalid SHROUD_COPY_BATCH_SIZE value: '{val}'"))
        })?;
    }
    if let Ok(val) = std::env::var("SHROUD_COPY_COLLECTIONS") {
        config.copy.collections = split_list(&val);
    }
    if let Ok(val) = std::env::var("SHROUD_COPY_IGNORE_COLLECTIONS") {
        config.copy.ignore_collections = split_list(&val);
    }
    if let Ok(val) = std::env::var("SHROUD_COPY_DROP_EXISTING") {
        config.copy.drop_existing = parse_bool("SHROUD_COPY_DROP_EXISTING", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SHROUD_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("SHROUD_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("SHROUD_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SHROUD_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

/// Splits a comma-separated list, dropping blank entries
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
