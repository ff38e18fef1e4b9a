//! Configuration loading, validation, and management for runwatch.
//!
//! Loads configuration from `~/.runwatch/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Display-text overrides: locale → namespace → key → text.
pub type MessageTable = HashMap<String, HashMap<String, HashMap<String, String>>>;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// The root configuration structure.
///
/// Maps directly to `~/.runwatch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Preferred locale for text resolution
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Locale consulted when the preferred one has no entry for a key
    #[serde(default = "default_locale")]
    pub fallback_locale: String,

    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Gateway behavior
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Catalog overrides and additional locales
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub messages: MessageTable,
}

fn default_locale() -> String {
    "en".into()
}
fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Route HTTP 429 to `quota-exceeded` instead of the literal
    /// `generic-access-error` behavior.
    #[serde(default)]
    pub quota_aware: bool,
}

impl AppConfig {
    /// Load configuration from the default path (~/.runwatch/config.toml).
    ///
    /// Environment overrides:
    /// - `RUNWATCH_LOCALE` replaces `locale`
    /// - `RUNWATCH_QUOTA_AWARE` (`1`/`true`) replaces `gateway.quota_aware`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        Self::load_with_env(&config_path)
    }

    /// Load from a specific path, then apply environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `RUNWATCH_*` overrides looked up through `get`.
    ///
    /// Does not validate; an override can empty out `locale`.
    pub fn apply_env_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(locale) = get("RUNWATCH_LOCALE") {
            self.locale = locale;
        }

        if let Some(flag) = get("RUNWATCH_QUOTA_AWARE") {
            self.gateway.quota_aware = parse_flag(&flag);
        }
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".runwatch")
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.trim().is_empty() || self.fallback_locale.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "locale and fallback_locale must not be empty".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            fallback_locale: default_locale(),
            log_level: default_log_level(),
            gateway: GatewayConfig::default(),
            messages: HashMap::new(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
