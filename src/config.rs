//! Application configuration.
//!
//! Settings come from, in order of precedence: command-line flags, the
//! `DOCENTES_API_URL` environment variable, the JSON config file, and the
//! built-in defaults.

use crate::consts::cli_consts::{
    DEFAULT_ENDPOINT,
    effects::EFFECT_DURATION_MS,
    polling::POLL_INTERVAL_MS,
};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Invalid {name}: must be greater than zero")]
    InvalidDuration { name: &'static str },

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub effect_duration_ms: Option<u64>,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&buf).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the file if it exists, otherwise returns the empty configuration.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Default config location, `~/.docentes/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".docentes").join("config.json"))
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub poll_interval: Duration,
    pub effect_duration: Duration,
}

impl Settings {
    /// Merge every source of configuration and validate the result.
    pub fn resolve(
        cli_endpoint: Option<String>,
        env_endpoint: Option<String>,
        cli_poll_interval_ms: Option<u64>,
        config: &Config,
    ) -> Result<Self, ConfigError> {
        let endpoint = cli_endpoint
            .or(env_endpoint.filter(|e| !e.trim().is_empty()))
            .or_else(|| config.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        validate_endpoint(&endpoint)?;

        let poll_interval_ms = cli_poll_interval_ms
            .or(config.poll_interval_ms)
            .unwrap_or(POLL_INTERVAL_MS);
        if poll_interval_ms == 0 {
            return Err(ConfigError::InvalidDuration {
                name: "poll interval",
            });
        }

        let effect_duration_ms = config.effect_duration_ms.unwrap_or(EFFECT_DURATION_MS);
        if effect_duration_ms == 0 {
            return Err(ConfigError::InvalidDuration {
                name: "effect duration",
            });
        }

        Ok(Self {
            endpoint,
            poll_interval: Duration::from_millis(poll_interval_ms),
            effect_duration: Duration::from_millis(effect_duration_ms),
        })
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a written configuration file should return the same configuration.
    fn test_load_reads_every_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"endpoint": "http://escuela.local/api.php", "poll_interval_ms": 2000, "effect_duration_ms": 800}"#,
        )
        .unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(
            loaded_config,
            Config {
                endpoint: Some("http://escuela.local/api.php".to_string()),
                poll_interval_ms: Some(2000),
                effect_duration_ms: Some(800),
            }
        );
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let result = Config::load_from_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"poll_interval_ms": 250}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.endpoint, None);
        assert_eq!(config.poll_interval_ms, Some(250));
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Json { .. })));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(None, None, None, &Config::default()).unwrap();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.poll_interval, Duration::from_millis(1000));
        assert_eq!(settings.effect_duration, Duration::from_millis(5000));
    }

    #[test]
    fn test_endpoint_precedence() {
        let config = Config {
            endpoint: Some("http://file/api.php".to_string()),
            ..Config::default()
        };
        let cli = Some("http://cli/api.php".to_string());
        let env = Some("http://env/api.php".to_string());

        let settings = Settings::resolve(cli, env.clone(), None, &config).unwrap();
        assert_eq!(settings.endpoint, "http://cli/api.php");

        let settings = Settings::resolve(None, env, None, &config).unwrap();
        assert_eq!(settings.endpoint, "http://env/api.php");

        let settings = Settings::resolve(None, Some("  ".to_string()), None, &config).unwrap();
        assert_eq!(settings.endpoint, "http://file/api.php");
    }

    #[test]
    fn test_cli_interval_overrides_file() {
        let config = Config {
            poll_interval_ms: Some(3000),
            effect_duration_ms: Some(800),
            ..Config::default()
        };
        let settings = Settings::resolve(None, None, Some(500), &config).unwrap();
        assert_eq!(settings.poll_interval, Duration::from_millis(500));
        assert_eq!(settings.effect_duration, Duration::from_millis(800));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let config = Config::default();
        assert!(matches!(
            Settings::resolve(Some("not a url".to_string()), None, None, &config),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Settings::resolve(Some("ftp://host/api.php".to_string()), None, None, &config),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Settings::resolve(None, None, Some(0), &config),
            Err(ConfigError::InvalidDuration { .. })
        ));
    }
}
