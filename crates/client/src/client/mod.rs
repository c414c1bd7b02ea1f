//! Main fleet events API client.
//!
//! This module provides the primary [`FleetClient`] for talking to the fleet
//! events REST backend.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login/logout and bearer token handling
//! - `events`: Event listing
//! - `export`: Backend-delegated export
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Session state tracking (see [`crate::session::SessionStore`])
//! - Snapshot ownership (see [`crate::store::EventStore`])
//!
//! # Invariants
//! - Exactly one attempt per network call; the user retries manually.
//! - Every request carries the configured timeout.

pub mod builder;

mod events;
mod export;
mod session;

use secrecy::SecretString;

/// Fleet events REST API client.
///
/// # Creating a Client
///
/// Use [`FleetClient::builder()`]:
///
/// ```rust,ignore
/// let client = FleetClient::builder()
///     .base_url("http://127.0.0.1:8000/v1".to_string())
///     .build()?;
/// ```
///
/// A bearer token can be supplied up front (from persisted state) via
/// [`builder::FleetClientBuilder::bearer_token`], or acquired by calling
/// [`FleetClient::login`].
#[derive(Debug)]
pub struct FleetClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) bearer: Option<SecretString>,
}

impl FleetClient {
    /// Create a new client builder.
    pub fn builder() -> builder::FleetClientBuilder {
        builder::FleetClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
