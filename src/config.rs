//! # Configuration
//!
//! Optional JSON settings for the CLI. Every field has a default, so an
//! empty object (or no file at all) is a valid configuration. Command-line
//! flags take precedence over the file.
//!
//! ```json
//! {
//!   "default_code_page": "cp437",
//!   "log_level": "info"
//! }
//! ```

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::ReinterpretError;
use crate::registry::canonical_name;

/// CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Code page used when `--as`/`--to` is omitted
    pub default_code_page: String,
    /// `env_logger` filter level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_code_page: "IBM437".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ReinterpretError> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| ReinterpretError::Config(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ReinterpretError> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded config from {}", path.display());
        Self::from_json(&text)
    }

    /// Check that the default code page exists and the log level parses.
    pub fn validate(&self) -> Result<(), ReinterpretError> {
        if canonical_name(&self.default_code_page).is_none() {
            return Err(ReinterpretError::Config(format!(
                "Unknown default_code_page '{}'",
                self.default_code_page
            )));
        }
        parse_log_level(&self.log_level)?;
        Ok(())
    }
}

/// Parse a log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`,
/// any case).
pub fn parse_log_level(level: &str) -> Result<LevelFilter, ReinterpretError> {
    LevelFilter::from_str(level)
        .map_err(|_| ReinterpretError::Config(format!("Unknown log_level '{}'", level)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_code_page, "IBM437");
        assert_eq!(config.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_json(r#"{"default_code_page": "cp280"}"#).unwrap();
        assert_eq!(config.default_code_page, "cp280");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_unknown_code_page_rejected() {
        let err = Config::from_json(r#"{"default_code_page": "cp1252"}"#).unwrap_err();
        assert!(matches!(err, ReinterpretError::Config(_)));
        assert!(err.to_string().contains("cp1252"));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = Config::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ReinterpretError::Config(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_log_level("off").unwrap(), LevelFilter::Off);
        assert_eq!(parse_log_level("Trace").unwrap(), LevelFilter::Trace);
        assert!(parse_log_level("").is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            Config::from_json(r#"{"colour": "blue"}"#),
            Err(ReinterpretError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_code_page": "tscii", "log_level": "debug"}}"#).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.default_code_page, "tscii");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ReinterpretError::Io(_))));
    }
}
