//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/ride-pricing/config.toml`).
//! Every section is optional and falls back to its defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shared::errors::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub pricing: PricingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    /// TOML file with pricing configurations to load into the store.
    pub policy_file: Option<PathBuf>,
    /// Name of the configuration used when a caller does not pick one.
    pub active_config: Option<String>,
    /// Free waiting allowance for waiting-charge rules that omit it.
    pub default_free_waiting_minutes: u32,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            policy_file: None,
            active_config: None,
            default_free_waiting_minutes: 3,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ride-pricing")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "text");
        assert_eq!(cfg.pricing.default_free_waiting_minutes, 3);
        assert!(cfg.pricing.policy_file.is_none());
    }

    #[test]
    fn partial_sections_are_merged_with_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [logging]
            level = "debug"

            [pricing]
            active_config = "City"
            policy_file = "/etc/ride-pricing/policy.toml"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, "text");
        assert_eq!(cfg.pricing.active_config.as_deref(), Some("City"));
        assert_eq!(
            cfg.pricing.policy_file,
            Some(PathBuf::from("/etc/ride-pricing/policy.toml"))
        );
        assert_eq!(cfg.pricing.default_free_waiting_minutes, 3);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AppConfig::from_toml("[logging\nlevel=").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/ride-pricing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        assert!(default_config_path().ends_with("ride-pricing/config.toml"));
    }
}
