//! Event listing on [`FleetClient`].

use crate::client::FleetClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Event;

impl FleetClient {
    /// Fetch the full event collection, attaching the bearer token when one
    /// is held.
    ///
    /// The list comes back verbatim; callers commit it to an
    /// [`crate::store::EventStore`] to get stale-fetch protection.
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        endpoints::list_events(&self.http, &self.base_url, self.bearer_token()).await
    }
}
