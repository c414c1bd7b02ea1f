//! Configuration types for the fleet events client.
//!
//! Responsibilities:
//! - Define the resolved `Config` handed to clients after loading.
//!
//! Does NOT handle:
//! - Loading from environment (see `loader`).
//! - Token persistence (see `persistence`).

use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Resolved connection configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend, including the version prefix
    /// (e.g. `http://127.0.0.1:8000/v1`).
    pub base_url: String,
    /// Request timeout applied to every network call.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
