//! Anonymization configuration

use crate::config::fields::{default_field_list, resolve_field_list};
use serde::{Deserialize, Serialize};

/// Generator locales with built-in data
pub const SUPPORTED_LOCALES: &[&str] = &["en"];

/// `[anonymization]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Field list used when `fields` is empty, and the base `+`/`-` modify
    #[serde(default = "default_field_list")]
    pub default_fields: Vec<String>,

    /// Field-list option: empty, `+a,b`, `-a,b`, or a full replacement list
    #[serde(default)]
    pub fields: String,

    /// Locale of generated values
    #[serde(default = "default_faker_locale")]
    pub faker_locale: String,
}

fn default_faker_locale() -> String {
    "en".to_string()
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            default_fields: default_field_list(),
            fields: String::new(),
            faker_locale: default_faker_locale(),
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !SUPPORTED_LOCALES.contains(&self.faker_locale.as_str()) {
            return Err(format!(
                "Invalid anonymization.faker_locale '{}'. Must be one of: {}",
                self.faker_locale,
                SUPPORTED_LOCALES.join(", ")
            ));
        }

        if let Some(entry) = self.default_fields.iter().find(|f| f.trim().is_empty()) {
            return Err(format!(
                "anonymization.default_fields contains a blank entry: '{entry}'"
            ));
        }

        Ok(())
    }

    /// Apply `SHROUD_ANONYMIZATION_*` environment overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SHROUD_ANONYMIZATION_FIELDS") {
            self.fields = val;
        }
        if let Ok(val) = std::env::var("SHROUD_ANONYMIZATION_FAKER_LOCALE") {
            self.faker_locale = val;
        }
    }

    /// The effective field list after applying `fields` to `default_fields`
    pub fn resolved_fields(&self) -> Vec<String> {
        resolve_field_list(&self.fields, &self.default_fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnonymizationConfig::default();
        assert_eq!(config.default_fields.len(), 9);
        assert!(config.fields.is_empty());
        assert_eq!(config.faker_locale, "en");
        assert!(config.validate().is_ok());
        assert_eq!(config.resolved_fields(), config.default_fields);
    }

    #[test]
    fn test_unsupported_locale() {
        let config = AnonymizationConfig {
            faker_locale: "fr".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("faker_locale"));
    }

    #[test]
    fn test_blank_default_field() {
        let config = AnonymizationConfig {
            default_fields: vec!["email".to_string(), " ".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolved_fields_with_modifier() {
        let config = AnonymizationConfig {
            default_fields: vec!["email".to_string(), "name".to_string()],
            fields: "-name".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolved_fields(), vec!["email"]);
    }

    #[test]
    fn test_deserialize_partial_section() {
        let config: AnonymizationConfig = toml::from_str(r#"fields = "+ssn""#).unwrap();
        assert_eq!(config.faker_locale, "en");
        assert_eq!(config.resolved_fields().last().map(String::as_str), Some("ssn"));
    }
}
