//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error
//!   types.
//! - Map `ClientError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use fleet_client::ClientError;

/// Structured exit codes for fleet-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Invalid credentials or a rejected token.
    ///
    /// Scripts should re-run `login` before retrying.
    AuthenticationFailed = 2,

    /// Network, timeout, or DNS failure.
    ///
    /// Scripts may retry; the client itself never does.
    ConnectionError = 3,

    /// The requested resource does not exist.
    NotFound = 4,

    /// Bad input: malformed URL, date, or format parameter.
    ///
    /// Scripts should fix the invocation, not retry it.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with `std::process::exit`.
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => Self::AuthenticationFailed,
            ClientError::ApiError { status, .. } => match status {
                401 | 403 => Self::AuthenticationFailed,
                404 => Self::NotFound,
                400 | 422 => Self::ValidationError,
                _ => Self::GeneralError,
            },
            ClientError::HttpError(_) => Self::ConnectionError,
            ClientError::InvalidUrl(_) => Self::ValidationError,
            ClientError::InvalidResponse(_) | ClientError::ExportFailed(_) => Self::GeneralError,
        }
    }
}

/// Resolve the exit code for a command failure, honoring a typed
/// [`ClientError`] anywhere in the anyhow chain.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(client_err) = cause.downcast_ref::<ClientError>() {
            return ExitCode::from(client_err);
        }
    }
    ExitCode::GeneralError
}
