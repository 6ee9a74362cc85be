//! Path utilities for pitboss.
//!
//! All state lives under `~/.pitboss/`:
//! - `~/.pitboss/config.toml` - main configuration
//! - `~/.pitboss/session.json` - stored session tokens and profile

use std::path::PathBuf;

/// Returns the pitboss home directory (`~/.pitboss/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pitboss")
}

/// Returns the default config file path (`~/.pitboss/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default session file path (`~/.pitboss/session.json`).
pub fn default_session() -> PathBuf {
    home_dir().join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_pitboss_home() {
        let home = home_dir();
        let config = default_config();
        let session = default_session();

        assert!(home.to_string_lossy().contains(".pitboss"));
        assert!(config.to_string_lossy().contains(".pitboss"));
        assert!(session.to_string_lossy().ends_with("session.json"));
    }
}
