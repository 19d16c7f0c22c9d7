//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SPORTSCHED_AUTH_LATENCY_MS` | `1000` |
//! | `SPORTSCHED_DIRECTORY_PATH` | built-in demo accounts |
//! | `SPORTSCHED_STORAGE_PATH` | platform config dir |
//! | `SPORTSCHED_DEMO_DATA` | `true` |

use std::path::PathBuf;
use std::time::Duration;

/// Simulated backend latency for login/register.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} is not a valid {expected}: {value}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub auth_latency: Duration,
    pub directory_path: Option<PathBuf>,
    pub storage_path: Option<PathBuf>,
    pub demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_latency: DEFAULT_AUTH_LATENCY,
            directory_path: None,
            storage_path: None,
            demo_data: true,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get("SPORTSCHED_AUTH_LATENCY_MS") {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "SPORTSCHED_AUTH_LATENCY_MS",
                    expected: "number of milliseconds",
                    value: raw.clone(),
                })?;
            config.auth_latency = Duration::from_millis(millis);
        }

        config.directory_path = get("SPORTSCHED_DIRECTORY_PATH").map(PathBuf::from);
        config.storage_path = get("SPORTSCHED_STORAGE_PATH").map(PathBuf::from);

        if let Some(raw) = get("SPORTSCHED_DEMO_DATA") {
            config.demo_data = parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                key: "SPORTSCHED_DEMO_DATA",
                expected: "boolean",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.auth_latency, Duration::from_millis(1000));
        assert!(config.demo_data);
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SPORTSCHED_AUTH_LATENCY_MS", "0"),
            ("SPORTSCHED_DIRECTORY_PATH", "/etc/sportsched/users.json"),
            ("SPORTSCHED_STORAGE_PATH", "/tmp/storage.json"),
            ("SPORTSCHED_DEMO_DATA", "off"),
        ]))
        .unwrap();

        assert_eq!(config.auth_latency, Duration::ZERO);
        assert_eq!(
            config.directory_path,
            Some(PathBuf::from("/etc/sportsched/users.json"))
        );
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/storage.json")));
        assert!(!config.demo_data);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config =
            AppConfig::from_lookup(lookup(&[("SPORTSCHED_STORAGE_PATH", "  ")])).unwrap();
        assert_eq!(config.storage_path, None);
    }

    #[test]
    fn malformed_latency_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("SPORTSCHED_AUTH_LATENCY_MS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("SPORTSCHED_AUTH_LATENCY_MS"));
    }

    #[test]
    fn malformed_flag_is_an_error() {
        let result = AppConfig::from_lookup(lookup(&[("SPORTSCHED_DEMO_DATA", "maybe")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
