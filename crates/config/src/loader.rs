//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Merge configuration from `.env` files, environment variables, and
//!   caller-supplied overrides into a [`Config`].
//! - Validate values before they reach the client.
//!
//! Does NOT handle:
//! - Token persistence (see `persistence`).
//!
//! Invariants:
//! - Caller overrides (CLI flags) take precedence over environment
//!   variables, which take precedence over defaults.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - `load_dotenv()` must be called explicitly; a missing `.env` file is
//!   not an error.

use std::time::Duration;

use crate::constants::MAX_TIMEOUT_SECS;
use crate::error::ConfigError;
use crate::types::Config;

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. The value is trimmed.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Builder-pattern loader merging defaults, environment, and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the working directory, if one exists.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::Dotenv(e.to_string())),
        }
    }

    /// Apply `FLEET_BASE_URL` and `FLEET_TIMEOUT` from the environment.
    /// Values already set on the loader (CLI overrides) win.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if self.base_url.is_none() {
            self.base_url = env_var_or_none("FLEET_BASE_URL");
        }
        if self.timeout.is_none()
            && let Some(raw) = env_var_or_none("FLEET_TIMEOUT")
        {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "FLEET_TIMEOUT".to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Override the base URL (highest priority).
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    /// Override the timeout in seconds (highest priority).
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    /// Produce the final validated [`Config`].
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();
        let timeout = self.timeout.unwrap_or(defaults.timeout);

        if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidValue {
                var: "FLEET_TIMEOUT".to_string(),
                message: format!("must be between 1 and {} seconds", MAX_TIMEOUT_SECS),
            });
        }

        let base_url = self.base_url.unwrap_or(defaults.base_url);
        let base_url = base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|e| ConfigError::InvalidValue {
            var: "FLEET_BASE_URL".to_string(),
            message: e.to_string(),
        })?;

        Ok(Config { base_url, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        temp_env::with_vars_unset(["FLEET_BASE_URL", "FLEET_TIMEOUT"], || {
            let config = ConfigLoader::new().apply_env().unwrap().build().unwrap();
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn test_env_values_are_picked_up() {
        temp_env::with_vars(
            [
                ("FLEET_BASE_URL", Some("http://backend:9000/v1")),
                ("FLEET_TIMEOUT", Some("5")),
            ],
            || {
                let config = ConfigLoader::new().apply_env().unwrap().build().unwrap();
                assert_eq!(config.base_url, "http://backend:9000/v1");
                assert_eq!(config.timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    #[serial]
    fn test_overrides_beat_env() {
        temp_env::with_vars([("FLEET_BASE_URL", Some("http://backend:9000/v1"))], || {
            let config = ConfigLoader::new()
                .with_base_url(Some("http://cli-flag:8000/v1".to_string()))
                .apply_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.base_url, "http://cli-flag:8000/v1");
        });
    }

    #[test]
    #[serial]
    fn test_whitespace_env_is_unset() {
        temp_env::with_vars([("FLEET_BASE_URL", Some("   "))], || {
            assert_eq!(env_var_or_none("FLEET_BASE_URL"), None);
        });
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_rejected() {
        temp_env::with_vars([("FLEET_TIMEOUT", Some("soon"))], || {
            let err = ConfigLoader::new().apply_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        });
    }

    #[test]
    #[serial]
    fn test_zero_timeout_rejected() {
        temp_env::with_vars_unset(["FLEET_TIMEOUT"], || {
            let err = ConfigLoader::new()
                .with_timeout_secs(Some(0))
                .build()
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_base_url_rejected() {
        temp_env::with_vars_unset(["FLEET_BASE_URL"], || {
            let err = ConfigLoader::new()
                .with_base_url(Some("not a url".to_string()))
                .build()
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        });
    }
}
