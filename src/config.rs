//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with an environment variable
//! override for the backend base URL (`PITBOSS_API_URL`). A missing file
//! falls back to defaults so the console works against a local backend
//! without any setup.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

/// Backend used when nothing else is configured (local development stack).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5022/api";

/// Environment variable that overrides `backend.base_url`.
pub const BASE_URL_ENV: &str = "PITBOSS_API_URL";

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Console behavior settings shared by all screens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Rows requested per page.
    pub page_size: u32,
    /// Debounce window applied to search input before a re-fetch.
    pub search_debounce_ms: u64,
    /// Dashboard auto-refresh interval in watch mode.
    pub refresh_interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: 30,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            search_debounce_ms: 500,
            refresh_interval_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ConsoleConfig {
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber.
    ///
    /// `verbosity` comes from repeated `-v` flags and widens the filter
    /// beyond the configured level. Logs go to stderr so they never mix
    /// with command output.
    pub fn init(&self, verbosity: u8) {
        let level = match verbosity {
            0 => self.level.as_str(),
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load the config file if present, otherwise fall back to defaults.
    ///
    /// The environment override applies either way.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                self.backend.base_url = url;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.backend.base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if let Err(e) = Url::parse(&self.backend.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.console.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.console.page_size, 20);
        assert_eq!(config.console.search_debounce_ms, 500);
        assert_eq!(config.console.refresh_interval_secs, 30);
    }

    #[test]
    fn test_duration_accessors() {
        let config = Config::default();
        assert_eq!(config.backend.timeout(), Duration::from_secs(30));
        assert_eq!(config.console.debounce(), Duration::from_millis(500));
        assert_eq!(config.console.refresh_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[backend]
base_url = "https://admin.example.com/api"
"#,
        )
        .unwrap();

        assert_eq!(config.backend.base_url, "https://admin.example.com/api");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.console.page_size, 20);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_unparseable_url() {
        let mut config = Config::default();
        config.backend.base_url = "not a url".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.console.page_size = 0;
        assert!(config.validate().is_err());
    }
}
