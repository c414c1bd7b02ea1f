//! Authentication endpoints.

use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{Credentials, LoginOutcome, LoginResponse};

/// Login with username and password.
///
/// The response body is either the user object itself or a `{user, token}`
/// wrapper; both resolve to a [`LoginOutcome`] here, at the boundary.
///
/// # Errors
///
/// A 401 or 403 becomes [`ClientError::AuthFailed`] with the canonical
/// "Invalid credentials" message; other failures propagate unchanged.
pub async fn login(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<LoginOutcome> {
    debug!("Logging in as {}", credentials.username);

    let url = format!("{}/auth/login", base_url);
    let builder = client.post(&url).json(&json!({
        "username": credentials.username,
        "password": credentials.password.expose_secret(),
    }));

    let response = match send_request(builder).await {
        Ok(response) => response,
        Err(e) if e.is_auth_error() => {
            return Err(ClientError::AuthFailed("Invalid credentials".to_string()));
        }
        Err(e) => return Err(e),
    };

    let body: LoginResponse = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Unexpected login body: {e}")))?;

    Ok(body.into())
}
