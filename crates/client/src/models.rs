//! Data models for the fleet events API.

pub mod auth;
pub mod events;

pub use auth::{Credentials, LoginOutcome, LoginResponse, User};
pub use events::Event;
