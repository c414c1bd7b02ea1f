//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration or persisting the token.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held an unusable value.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// A `.env` file was present but could not be read.
    #[error("Failed to load .env file: {0}")]
    Dotenv(String),

    /// Keyring access failed.
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}
