//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::cli::{output, paths};
use crate::config::{Config, BASE_URL_ENV};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your backend URL", path.display()));
    output::note("2. Run: pitboss check backend");
    output::note("3. Run: pitboss login");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::section("Effective Configuration");
    if path.exists() {
        output::field("Source", path.display());
    } else {
        output::field(
            "Source",
            format!("{} (not found, using defaults)", path.display()),
        );
    }
    if std::env::var(BASE_URL_ENV).is_ok() {
        output::note(&format!(
            "{BASE_URL_ENV} is set and overrides backend.base_url"
        ));
    }

    output::section("Backend");
    output::field("Base URL", &config.backend.base_url);
    output::field("Timeout", format!("{}s", config.backend.timeout_secs));

    output::section("Console");
    output::field("Page size", config.console.page_size);
    output::field(
        "Search debounce",
        format!("{}ms", config.console.search_debounce_ms),
    );
    output::field(
        "Refresh interval",
        format!("{}s", config.console.refresh_interval_secs),
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Session");
    let session_path = paths::default_session();
    output::field("File", session_path.display());
    output::field(
        "State",
        if session_path.exists() {
            "present"
        } else {
            "absent"
        },
    );

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    let warnings = advisory_warnings(&config);
    if !warnings.is_empty() {
        output::section("Warnings");
        for warning in &warnings {
            output::warning(warning);
        }
    }

    output::field("Next", format!("pitboss config show -c {}", path.display()));

    Ok(())
}

/// Soft problems that pass validation but deserve a look.
fn advisory_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    let url = &config.backend.base_url;
    if url.starts_with("http://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warnings.push("backend.base_url uses plain HTTP on a non-local host".to_string());
    }
    if config.backend.timeout_secs > 120 {
        warnings.push(format!(
            "backend.timeout_secs = {} is unusually high",
            config.backend.timeout_secs
        ));
    }
    if config.console.page_size > 100 {
        warnings.push(format!(
            "console.page_size = {} will produce very tall tables",
            config.console.page_size
        ));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    #[test]
    fn test_config_template_is_not_empty() {
        assert!(!CONFIG_TEMPLATE.is_empty());
    }

    #[test]
    fn test_config_template_is_valid_toml() {
        let result: std::result::Result<toml::Value, _> = toml::from_str(CONFIG_TEMPLATE);
        assert!(result.is_ok(), "CONFIG_TEMPLATE is not valid TOML");
    }

    #[test]
    fn test_config_template_parses_as_config() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(!config.backend.base_url.is_empty());
    }

    #[test]
    fn test_execute_init_creates_file() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        let result = execute_init(&config_path, false);
        assert!(result.is_ok());
        assert!(config_path.exists());
    }

    #[test]
    fn test_execute_init_writes_template_content() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        execute_init(&config_path, false).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_creates_parent_directories() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir
            .path()
            .join("nested")
            .join("dir")
            .join("config.toml");

        let result = execute_init(&config_path, false);
        assert!(result.is_ok());
        assert!(config_path.exists());
    }

    #[test]
    fn test_execute_init_fails_if_file_exists_without_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "existing content").unwrap();

        let result = execute_init(&config_path, false);
        assert!(result.is_err());

        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, "existing content");
    }

    #[test]
    fn test_execute_init_overwrites_with_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "existing content").unwrap();

        let result = execute_init(&config_path, true);
        assert!(result.is_ok());

        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_error_mentions_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "existing content").unwrap();

        let error = execute_init(&config_path, false).unwrap_err();
        assert!(
            error.to_string().contains("--force"),
            "Error should mention --force flag"
        );
    }

    #[test]
    fn test_execute_validate_accepts_template() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, CONFIG_TEMPLATE).unwrap();

        assert!(execute_validate(&config_path).is_ok());
    }

    #[test]
    fn test_execute_validate_rejects_bad_toml() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "this is not toml [").unwrap();

        assert!(execute_validate(&config_path).is_err());
    }

    #[test]
    fn test_execute_validate_missing_file_fails() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("missing.toml");

        assert!(execute_validate(&config_path).is_err());
    }

    #[test]
    fn test_execute_show_works_without_file() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("missing.toml");

        assert!(execute_show(&config_path).is_ok());
    }

    #[test]
    fn test_advisory_warnings_flag_remote_plain_http() {
        let mut config = Config::default();
        config.backend.base_url = "http://admin.example.com/api".to_string();

        let warnings = advisory_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("plain HTTP"));
    }

    #[test]
    fn test_advisory_warnings_quiet_for_defaults() {
        let config = Config::default();
        assert!(advisory_warnings(&config).is_empty());
    }
}
