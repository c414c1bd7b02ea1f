//! Configuration management for the fleet events client.
//!
//! This crate provides types and loaders for connection configuration from
//! environment variables and `.env` files, plus persistence of the session
//! token in the system keyring.

pub mod constants;
mod error;
mod loader;
pub mod persistence;
pub mod types;

pub use error::ConfigError;
pub use loader::{ConfigLoader, env_var_or_none};
pub use persistence::TokenStore;
pub use types::Config;
