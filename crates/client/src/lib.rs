//! Fleet events REST API client.
//!
//! This crate provides a type-safe client for the fleet events backend:
//! login with bearer token handling, event listing, a pure client-side
//! filter engine, and JSON/CSV export encoders (local and backend-delegated).

pub mod client;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod session;
pub mod store;

mod serde_helpers;

pub mod endpoints;

pub use client::FleetClient;
pub use client::builder::FleetClientBuilder;
pub use error::{ClientError, Result};
pub use export::ExportFormat;
pub use filter::{FilterSpec, StatusFilter};
pub use models::{Credentials, Event, LoginOutcome, User};
pub use session::{SessionState, SessionStore};
pub use store::{EventStore, FetchGeneration};
