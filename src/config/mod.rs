//! Configuration types and loading from an optional TOML file.
//!
//! All fields have defaults, so the tool is fully usable without a config
//! file; CLI flags override whatever was loaded.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::core::error::{Error, Result};

/// Complete configuration for a suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Per-suite time budget in milliseconds.
    pub timeout_ms: u64,

    /// Extension of the report artifact written next to each completed
    /// suite. Files carrying it are excluded from discovery.
    pub report_extension: String,

    /// Maximum number of passed records listed in the breakdown.
    pub max_passed_listed: usize,

    /// Echo the command being spawned for each suite.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: 100,
            report_extension: "test".to_string(),
            max_passed_listed: 50,
            verbose: false,
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check the configuration for unusable values.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::config("timeout-ms must be nonzero"));
        }
        if self.report_extension.is_empty() {
            return Err(Error::config("report-extension must not be empty"));
        }
        Ok(())
    }

    /// The per-suite time budget.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timeout_ms, 100);
        assert_eq!(config.report_extension, "test");
        assert_eq!(config.max_passed_listed, 50);
        assert!(!config.verbose);
        assert_eq!(config.timeout(), Duration::from_millis(100));
    }

    #[test]
    fn test_from_toml_str_partial() {
        let config = Config::from_toml_str("timeout-ms = 500\n").unwrap();
        assert_eq!(config.timeout_ms, 500);
        // Unset fields keep their defaults.
        assert_eq!(config.report_extension, "test");
    }

    #[test]
    fn test_from_toml_str_full() {
        let config = Config::from_toml_str(
            r#"
            timeout-ms = 250
            report-extension = "report"
            max-passed-listed = 10
            verbose = true
            "#,
        )
        .unwrap();
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.report_extension, "report");
        assert_eq!(config.max_passed_listed, 10);
        assert!(config.verbose);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml_str("no-such-field = 1\n").is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_toml_str("timeout-ms = 0\n").unwrap_err();
        assert!(err.to_string().contains("timeout-ms"));
    }

    #[test]
    fn test_empty_report_extension_rejected() {
        let err = Config::from_toml_str("report-extension = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("report-extension"));
    }
}
