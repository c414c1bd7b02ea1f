//! Common test utilities for integration tests.
//!
//! Re-exports the types most tests need so suites can `use common::*;`.

#[allow(unused_imports)]
pub use fleet_client::{
    ClientError, Credentials, Event, EventStore, ExportFormat, FilterSpec, FleetClient,
    SessionStore, StatusFilter,
};
#[allow(unused_imports)]
pub use wiremock::matchers::{body_json, header, method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at the given mock server.
pub fn client_for(server: &MockServer) -> FleetClient {
    FleetClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build against mock server URI")
}
