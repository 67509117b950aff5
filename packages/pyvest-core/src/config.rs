//! Analytics configuration loaded from JSON and the environment.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable pointing at an alternate config file.
pub const CONFIG_FILE_ENV: &str = "PYVEST_CONFIG_FILE";

/// Environment variable overriding the configured risk-free rate.
pub const RISK_FREE_RATE_ENV: &str = "PYVEST_RISK_FREE_RATE";

/// Settings applied when computing risk-adjusted metrics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Annual risk-free rate used for the Sharpe ratio (e.g., 0.04 for 4%)
    #[serde(default)]
    pub risk_free_rate: f64,
}

impl AnalyticsConfig {
    /// Load configuration from the default path, then apply environment overrides.
    ///
    /// Default path: `~/.pyvest/config.json`
    /// Can be overridden with the `PYVEST_CONFIG_FILE` environment variable.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_path(&Self::default_path())?;
        config.apply_rate_override(env::var(RISK_FREE_RATE_ENV).ok().as_deref())?;
        Ok(config)
    }

    /// Replace the risk-free rate with `raw` when present.
    ///
    /// An unparsable value is an error rather than being ignored.
    fn apply_rate_override(&mut self, raw: Option<&str>) -> Result<()> {
        let Some(raw) = raw else {
            return Ok(());
        };

        self.risk_free_rate = raw.trim().parse().map_err(|_| {
            Error::InvalidInput(format!(
                "{} must be a number, got '{}'",
                RISK_FREE_RATE_ENV, raw
            ))
        })?;
        debug!(
            risk_free_rate = self.risk_free_rate,
            "risk-free rate overridden from environment"
        );
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_FILE_ENV) {
            return PathBuf::from(path);
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".pyvest/config.json"))
            .unwrap_or_else(|| PathBuf::from("pyvest.json"))
    }

    /// Load configuration from a specific path, without environment overrides.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AnalyticsConfig::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AnalyticsConfig::default());
        assert_eq!(config.risk_free_rate, 0.0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "risk_free_rate": 0.045 }"#).unwrap();

        let config = AnalyticsConfig::load_from_path(&path).unwrap();
        assert_eq!(config.risk_free_rate, 0.045);
    }

    #[test]
    fn test_empty_object_uses_field_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(
            AnalyticsConfig::load_from_path(&path).unwrap(),
            AnalyticsConfig::default()
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "risk_free_rate = 0.04").unwrap();

        assert!(matches!(
            AnalyticsConfig::load_from_path(&path),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_rate_override_replaces_file_value() {
        let mut config = AnalyticsConfig {
            risk_free_rate: 0.01,
        };
        config.apply_rate_override(Some(" 0.035 ")).unwrap();
        assert_eq!(config.risk_free_rate, 0.035);
    }

    #[test]
    fn test_rate_override_rejects_garbage() {
        let mut config = AnalyticsConfig {
            risk_free_rate: 0.01,
        };
        assert!(matches!(
            config.apply_rate_override(Some("abc")),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(config.risk_free_rate, 0.01);
    }

    #[test]
    fn test_rate_override_absent_keeps_file_value() {
        let mut config = AnalyticsConfig {
            risk_free_rate: 0.01,
        };
        config.apply_rate_override(None).unwrap();
        assert_eq!(config.risk_free_rate, 0.01);
    }

    #[test]
    fn test_default_path_honours_env_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "risk_free_rate": 0.05 }"#).unwrap();

        // Only this test touches the variable
        env::set_var(CONFIG_FILE_ENV, &path);
        let resolved = AnalyticsConfig::default_path();
        env::remove_var(CONFIG_FILE_ENV);

        assert_eq!(resolved, path);
        assert_eq!(
            AnalyticsConfig::load_from_path(&resolved).unwrap().risk_free_rate,
            0.05
        );
    }
}
