//! Authentication models for the login API.
//!
//! Responsibilities:
//! - Define the `User` identity record and login request/response types.
//! - Absorb the two observed login response shapes (a bare user object, or a
//!   `{user, token}` wrapper) into one resolved outcome at the boundary.
//!
//! Does NOT handle:
//! - Sending the login request (see `endpoints::auth`).
//! - Session state transitions (see the `session` module).

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// The authenticated user, as reported by the backend.
///
/// Lives in memory for the duration of the session only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Opaque backend-assigned identifier; string or number on the wire.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
}

/// Login request credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}

/// Raw login response body.
///
/// The backend either returns the user object directly or wraps it as
/// `{user, token}`. Resolved into [`LoginOutcome`] exactly once; nothing
/// downstream branches on the wire shape again.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Wrapped {
        user: User,
        token: Option<SecretString>,
    },
    Bare(User),
}

/// Resolved login result: the user, plus a bearer token if the backend
/// issued one.
#[derive(Debug)]
pub struct LoginOutcome {
    pub user: User,
    pub token: Option<SecretString>,
}

impl From<LoginResponse> for LoginOutcome {
    fn from(response: LoginResponse) -> Self {
        match response {
            LoginResponse::Wrapped { user, token } => Self { user, token },
            LoginResponse::Bare(user) => Self { user, token: None },
        }
    }
}
