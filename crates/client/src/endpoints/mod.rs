//! REST API endpoint implementations.

mod auth;
mod events;
mod export;
mod request;

pub use auth::login;
pub use events::list_events;
pub use export::{build_export_url, fetch_export};
pub use request::send_request;
