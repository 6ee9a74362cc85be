use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use pitboss::config::{Config, BASE_URL_ENV, DEFAULT_BASE_URL};
use pitboss::error::{ConfigError, Error};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

// Serializes tests that read or write the base URL override.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("pitboss-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_rejects_zero_timeout() {
    let toml = r#"
[backend]
base_url = "http://localhost:5022/api"
timeout_secs = 0
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "timeout_secs",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid timeout error, got {err}"),
        Ok(_) => panic!("Expected zero timeout to be rejected"),
    }
}

#[test]
fn config_rejects_zero_page_size() {
    let toml = r#"
[console]
page_size = 0
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "page_size", ..
        })) => {}
        Err(err) => panic!("Expected invalid page size error, got {err}"),
        Ok(_) => panic!("Expected zero page size to be rejected"),
    }
}

#[test]
fn config_rejects_malformed_base_url() {
    let _guard = ENV_LOCK.lock().expect("env lock poisoned");
    std::env::remove_var(BASE_URL_ENV);

    let toml = r#"
[backend]
base_url = "not a url"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "base_url", ..
        })) => {}
        Err(err) => panic!("Expected invalid base URL error, got {err}"),
        Ok(_) => panic!("Expected malformed base URL to be rejected"),
    }
}

#[test]
fn config_missing_file_is_a_read_error() {
    let mut path = std::env::temp_dir();
    path.push("pitboss-config-test-definitely-missing.toml");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::ReadFile(_))) => {}
        Err(err) => panic!("Expected read error, got {err}"),
        Ok(_) => panic!("Expected missing file to fail"),
    }
}

#[test]
fn load_or_default_falls_back_when_file_is_missing() {
    let _guard = ENV_LOCK.lock().expect("env lock poisoned");
    std::env::remove_var(BASE_URL_ENV);

    let mut path = std::env::temp_dir();
    path.push("pitboss-config-test-also-missing.toml");

    let config = Config::load_or_default(&path).expect("defaults load");
    assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.console.page_size, 20);
}

#[test]
fn env_override_wins_over_the_file() {
    let _guard = ENV_LOCK.lock().expect("env lock poisoned");

    let toml = r#"
[backend]
base_url = "http://file-backend:5022/api"
"#;

    let path = write_temp_config(toml);
    std::env::set_var(BASE_URL_ENV, "http://env-backend:9000/api");
    let result = Config::load(&path);
    std::env::remove_var(BASE_URL_ENV);
    let _ = fs::remove_file(&path);

    let config = result.expect("config loads");
    assert_eq!(config.backend.base_url, "http://env-backend:9000/api");
}

#[test]
fn empty_env_override_is_ignored() {
    let _guard = ENV_LOCK.lock().expect("env lock poisoned");

    let toml = r#"
[backend]
base_url = "http://file-backend:5022/api"
"#;

    let path = write_temp_config(toml);
    std::env::set_var(BASE_URL_ENV, "");
    let result = Config::load(&path);
    std::env::remove_var(BASE_URL_ENV);
    let _ = fs::remove_file(&path);

    let config = result.expect("config loads");
    assert_eq!(config.backend.base_url, "http://file-backend:5022/api");
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let _guard = ENV_LOCK.lock().expect("env lock poisoned");
    std::env::remove_var(BASE_URL_ENV);

    let toml = r#"
[console]
page_size = 50
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    let config = result.expect("config loads");
    assert_eq!(config.console.page_size, 50);
    assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.console.search_debounce_ms, 500);
}
