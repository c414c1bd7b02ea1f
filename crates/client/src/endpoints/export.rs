//! Backend-delegated export endpoint.

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::export::ExportFormat;
use crate::filter::{FilterSpec, StatusFilter};

/// Build the export URL carrying the filter spec as query parameters.
///
/// Empty filter fields are omitted; `format` is always present. The caller
/// can hand this URL to a browser or fetch it via [`fetch_export`].
pub fn build_export_url(
    base_url: &str,
    spec: &FilterSpec,
    format: ExportFormat,
) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/export_events", base_url))
        .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

    {
        let mut pairs = url.query_pairs_mut();
        if !spec.name_query.is_empty() {
            pairs.append_pair("name", &spec.name_query);
        }
        if let StatusFilter::Is(status) = &spec.status {
            pairs.append_pair("status", status);
        }
        if !spec.description_query.is_empty() {
            pairs.append_pair("description", &spec.description_query);
        }
        if let Some(from) = spec.date_from {
            pairs.append_pair("dateFrom", &from.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
        if let Some(to) = spec.date_to {
            pairs.append_pair("dateTo", &to.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
        pairs.append_pair("format", format.as_str());
    }

    Ok(url)
}

/// Fetch a backend-rendered export document.
///
/// Returns the response body text (JSON or CSV, per `format`).
pub async fn fetch_export(
    client: &Client,
    base_url: &str,
    bearer_token: Option<&str>,
    spec: &FilterSpec,
    format: ExportFormat,
) -> Result<String> {
    let url = build_export_url(base_url, spec, format)?;
    debug!(%url, "Fetching backend export");

    let mut builder = client.get(url.as_str());
    if let Some(token) = bearer_token {
        builder = builder.bearer_auth(token);
    }

    let response = send_request(builder).await?;
    Ok(response.text().await?)
}
