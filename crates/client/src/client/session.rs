//! Login/logout and bearer token handling on [`FleetClient`].
//!
//! # Invariants
//! - A token returned by the backend is installed immediately, so the very
//!   next request authenticates as the new user.
//! - `logout` discards the in-memory token only; the caller owns clearing
//!   any persisted copy.

use secrecy::{ExposeSecret, SecretString};

use crate::client::FleetClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Credentials, LoginOutcome};

impl FleetClient {
    /// Login with username and password.
    ///
    /// If the response carries a token it becomes the bearer credential for
    /// subsequent requests; the outcome hands the caller the same token for
    /// persistence. The caller is expected to follow a successful login with
    /// one event fetch.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClientError::AuthFailed`] on rejected
    /// credentials.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<LoginOutcome> {
        let outcome = endpoints::login(&self.http, &self.base_url, credentials).await?;
        if let Some(token) = &outcome.token {
            self.bearer = Some(token.clone());
        }
        Ok(outcome)
    }

    /// Discard the in-memory bearer token.
    pub fn logout(&mut self) {
        self.bearer = None;
    }

    /// The current bearer token, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer.as_ref().map(|t| t.expose_secret())
    }

    /// Replace the bearer token (e.g. with a persisted one).
    pub fn set_bearer_token(&mut self, token: Option<SecretString>) {
        self.bearer = token;
    }
}
