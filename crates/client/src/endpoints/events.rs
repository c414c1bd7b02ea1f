//! Event listing endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::Event;

/// Fetch the full event collection.
///
/// Attaches `Authorization: Bearer <token>` when a token is available. The
/// parsed array is returned verbatim; individual entity shape is not
/// validated beyond deserialization into the generalized [`Event`] model.
pub async fn list_events(
    client: &Client,
    base_url: &str,
    bearer_token: Option<&str>,
) -> Result<Vec<Event>> {
    let url = format!("{}/events", base_url);
    debug!(%url, "Fetching events");

    let mut builder = client.get(&url);
    if let Some(token) = bearer_token {
        builder = builder.bearer_auth(token);
    }

    let response = send_request(builder).await?;
    let events: Vec<Event> = response.json().await?;

    debug!(count = events.len(), "Fetched events");
    Ok(events)
}
