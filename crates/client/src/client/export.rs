//! Backend-delegated export on [`FleetClient`].

use url::Url;

use crate::client::FleetClient;
use crate::endpoints;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::filter::FilterSpec;

impl FleetClient {
    /// Build the backend export URL for the given filter and format without
    /// fetching it.
    pub fn export_url(&self, spec: &FilterSpec, format: ExportFormat) -> Result<Url> {
        endpoints::build_export_url(&self.base_url, spec, format)
    }

    /// Fetch a backend-rendered export document and return its body text.
    pub async fn fetch_export(&self, spec: &FilterSpec, format: ExportFormat) -> Result<String> {
        endpoints::fetch_export(
            &self.http,
            &self.base_url,
            self.bearer_token(),
            spec,
            format,
        )
        .await
    }
}
