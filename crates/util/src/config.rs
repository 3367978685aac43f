//! Application configuration for the Carte TUI.
//!
//! Configuration is a small JSON document stored in the standard
//! configuration directory (`~/.config/carte/config.json` on most platforms).
//! Every field is optional; a missing file yields the built-in defaults so a
//! first run needs no setup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::expand_tilde;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "CARTE_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Error surfaced when the configuration file exists but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-tunable presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Headline shown above the form
    pub title: String,
    /// Line shown under the headline
    pub subtitle: String,
    /// Prefix used when rendering prices (e.g. `R120.50`)
    pub currency_symbol: String,
    /// Preferred theme identifier; terminal capability may override it
    pub theme: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "A Taste With Christoffel".to_string(),
            subtitle: "Select your preferred course/meal".to_string(),
            currency_symbol: "R".to_string(),
            theme: None,
        }
    }
}

/// Returns the config path, honouring [`CONFIG_PATH_ENV`].
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carte")
        .join(CONFIG_FILE_NAME)
}

/// Loads configuration from a specific path. A missing file is not an error.
pub fn load_config_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_honors_environment_override() {
        let override_path = "~/custom/carte/config.json";
        temp_env::with_var(CONFIG_PATH_ENV, Some(override_path), || {
            assert_eq!(default_config_path(), expand_tilde(override_path));
        });
    }

    #[test]
    fn blank_override_falls_back_to_config_dir() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("   "), || {
            let path = default_config_path();
            assert!(path.ends_with(Path::new("carte").join(CONFIG_FILE_NAME)));
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config_from_path(&dir.path().join("absent.json")).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.currency_symbol, "R");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "currency_symbol": "$", "theme": "nord" }"#).expect("write config");

        let config = load_config_from_path(&path).expect("parse config");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.theme.as_deref(), Some("nord"));
        assert_eq!(config.title, AppConfig::default().title);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").expect("write config");

        let error = load_config_from_path(&path).expect_err("malformed config");
        assert!(matches!(error, ConfigError::Parse { .. }));
        assert!(error.to_string().contains(CONFIG_FILE_NAME));
    }
}
