//! Error types for the fleet client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during fleet client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed (bad credentials or a rejected login).
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error (connection failure, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx API response.
    #[error("HTTP error! status: {status} at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not match the expected contract.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Local export encoding failure.
    #[error("Export failed: {0}")]
    ExportFailed(String),
}

impl ClientError {
    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_))
            || matches!(self, Self::ApiError { status, .. } if *status == 401 || *status == 403)
    }

    /// HTTP status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failed_is_auth_error() {
        let err = ClientError::AuthFailed("Invalid credentials".to_string());
        assert!(err.is_auth_error());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_api_error_status_classification() {
        let err = ClientError::ApiError {
            status: 401,
            url: "http://localhost/events".to_string(),
            message: "unauthorized".to_string(),
        };
        assert!(err.is_auth_error());
        assert_eq!(err.status(), Some(401));

        let err = ClientError::ApiError {
            status: 500,
            url: "http://localhost/events".to_string(),
            message: "boom".to_string(),
        };
        assert!(!err.is_auth_error());
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_api_error_display_includes_status() {
        let err = ClientError::ApiError {
            status: 503,
            url: "http://localhost/events".to_string(),
            message: "unavailable".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("status: 503"));
        assert!(rendered.contains("unavailable"));
    }
}
