//! Centralized constants for the fleet events workspace.
//!
//! Default values used across crates to avoid magic number duplication.

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default backend base URL, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/v1";

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = "fleet-events";

/// Fixed keyring account under which the session token is persisted.
pub const TOKEN_ACCOUNT: &str = "session-token";
