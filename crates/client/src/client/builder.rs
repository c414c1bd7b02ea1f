//! Client builder for constructing [`FleetClient`] instances.
//!
//! Responsibilities:
//! - Provide a fluent builder API for client configuration.
//! - Validate the required base URL and normalize it (no trailing slash).
//! - Configure the underlying HTTP client (request timeout).
//!
//! # Invariants
//! - `base_url` is required; `build()` fails without it.
//! - Every built client carries a request timeout (default 30 seconds), so
//!   a hung backend cannot stall a command indefinitely.

use std::time::Duration;

use secrecy::SecretString;

use crate::client::FleetClient;
use crate::error::{ClientError, Result};
use fleet_config::constants::DEFAULT_TIMEOUT_SECS;

/// Builder for creating a new [`FleetClient`].
pub struct FleetClientBuilder {
    base_url: Option<String>,
    bearer_token: Option<SecretString>,
    timeout: Duration,
}

impl Default for FleetClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            bearer_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FleetClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the backend, including the version prefix,
    /// e.g. `http://127.0.0.1:8000/v1`. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Install a bearer token up front (typically the persisted token from a
    /// prior session). A token returned by a later login call replaces it.
    pub fn bearer_token(mut self, token: Option<SecretString>) -> Self {
        self.bearer_token = token;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if no base URL was provided or it
    /// fails basic validation, and [`ClientError::HttpError`] if the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<FleetClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base URL is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(FleetClient {
            http,
            base_url,
            bearer: self.bearer_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparseable_base_url() {
        let result = FleetClientBuilder::new()
            .base_url("not a url".to_string())
            .build();
        assert!(matches!(result.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_custom_timeout_accepted() {
        let client = FleetClientBuilder::new()
            .base_url("http://localhost:8000/v1".to_string())
            .timeout(Duration::from_secs(5))
            .build();
        assert!(client.is_ok());
    }
}
