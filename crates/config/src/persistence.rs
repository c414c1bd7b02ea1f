//! Session token persistence.
//!
//! Responsibilities:
//! - Store the bearer token issued at login in the system keyring under a
//!   fixed service/account key so it survives process restarts.
//! - Clear it on logout.
//!
//! Does NOT handle:
//! - Deciding when to persist or clear (the CLI command layer owns that).
//!
//! Invariants:
//! - Exactly one token is held at a time; saving overwrites the previous one.
//! - A missing keyring entry is not an error: `load` yields `None` and
//!   `clear` reports that nothing was stored.

use keyring::Entry;
use secrecy::{ExposeSecret, SecretString};

use crate::constants::{KEYRING_SERVICE, TOKEN_ACCOUNT};
use crate::error::ConfigError;

/// Keyring-backed store for the session token.
#[derive(Debug)]
pub struct TokenStore {
    entry: Entry,
}

impl TokenStore {
    /// Open the store under the canonical fixed key.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_keys(KEYRING_SERVICE, TOKEN_ACCOUNT)
    }

    /// Open the store under custom keys. Used by tests to avoid touching
    /// the real entry.
    pub fn with_keys(service: &str, account: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            entry: Entry::new(service, account)?,
        })
    }

    /// Persist the token, replacing any previous one.
    pub fn save(&self, token: &SecretString) -> Result<(), ConfigError> {
        self.entry.set_password(token.expose_secret())?;
        Ok(())
    }

    /// Load the persisted token, if any.
    pub fn load(&self) -> Result<Option<SecretString>, ConfigError> {
        match self.entry.get_password() {
            Ok(token) => Ok(Some(SecretString::new(token.into()))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the persisted token. Returns true if one was stored.
    pub fn clear(&self) -> Result<bool, ConfigError> {
        match self.entry.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
