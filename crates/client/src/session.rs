//! Session state for the authenticated user.
//!
//! Responsibilities:
//! - Track exactly one of `LoggedOut` / `LoggedIn(User)`.
//! - Carry the transient login-in-flight flag and the last auth error for
//!   presentation.
//!
//! Does NOT handle:
//! - The login HTTP call (see `endpoints::auth`).
//! - Bearer token storage (the client holds the in-memory token; persistence
//!   lives in `fleet-config`).
//!
//! Invariants:
//! - `auth_pending` is presentation feedback, not a third session state: the
//!   store is still `LoggedOut` or `LoggedIn` while a login is in flight.
//! - A failed login leaves the store `LoggedOut` and records the error.

use crate::error::ClientError;
use crate::models::User;

/// Whether, and as whom, the user is authenticated.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

/// Owns the session state; threaded explicitly through the application
/// rather than held as an ambient global.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: SessionState,
    auth_pending: bool,
    last_error: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::LoggedIn(user) => Some(user),
            SessionState::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    /// True while a login call is in flight.
    pub fn auth_pending(&self) -> bool {
        self.auth_pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Mark a login call as started: raises the pending flag and clears any
    /// stale error from a previous attempt.
    pub fn begin_login(&mut self) {
        self.auth_pending = true;
        self.last_error = None;
    }

    /// Record the login result. On success the store transitions to
    /// `LoggedIn`; on failure it stays `LoggedOut` with the error message
    /// retained for display.
    pub fn complete_login(&mut self, result: Result<User, ClientError>) {
        match result {
            Ok(user) => self.login_succeeded(user),
            Err(e) => self.login_failed(&e),
        }
    }

    /// Success half of [`complete_login`](Self::complete_login).
    pub fn login_succeeded(&mut self, user: User) {
        self.auth_pending = false;
        self.state = SessionState::LoggedIn(user);
        self.last_error = None;
    }

    /// Failure half of [`complete_login`](Self::complete_login). Borrows the
    /// error so the caller can still propagate it.
    pub fn login_failed(&mut self, error: &ClientError) {
        self.auth_pending = false;
        self.state = SessionState::LoggedOut;
        self.last_error = Some(error.to_string());
    }

    /// Drop back to `LoggedOut`. Returns true if a user was actually
    /// cleared, so callers know to also clear the event snapshot and any
    /// persisted token.
    pub fn logout(&mut self) -> bool {
        let was_logged_in = self.is_logged_in();
        self.state = SessionState::LoggedOut;
        self.last_error = None;
        was_logged_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            username: "admin".to_string(),
            id: Some("1".to_string()),
        }
    }

    #[test]
    fn test_starts_logged_out() {
        let store = SessionStore::new();
        assert_eq!(store.state(), &SessionState::LoggedOut);
        assert!(!store.auth_pending());
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_successful_login_transitions_to_logged_in() {
        let mut store = SessionStore::new();
        store.begin_login();
        assert!(store.auth_pending());

        store.complete_login(Ok(admin()));
        assert!(!store.auth_pending());
        assert!(store.is_logged_in());
        assert_eq!(store.user().unwrap().username, "admin");
    }

    #[test]
    fn test_failed_login_stays_logged_out_with_error() {
        let mut store = SessionStore::new();
        store.begin_login();
        store.complete_login(Err(ClientError::AuthFailed(
            "Invalid credentials".to_string(),
        )));

        assert!(!store.auth_pending());
        assert!(!store.is_logged_in());
        assert_eq!(
            store.last_error(),
            Some("Authentication failed: Invalid credentials")
        );
    }

    #[test]
    fn test_begin_login_clears_previous_error() {
        let mut store = SessionStore::new();
        store.begin_login();
        store.complete_login(Err(ClientError::AuthFailed("nope".to_string())));
        assert!(store.last_error().is_some());

        store.begin_login();
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_logout_reports_whether_user_was_cleared() {
        let mut store = SessionStore::new();
        assert!(!store.logout());

        store.complete_login(Ok(admin()));
        assert!(store.logout());
        assert_eq!(store.state(), &SessionState::LoggedOut);
    }
}
