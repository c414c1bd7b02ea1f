//! Export command implementation.
//!
//! Responsibilities:
//! - Encode the filtered subset locally as JSON or CSV, or delegate the
//!   rendering to the backend export endpoint (`--remote`).
//! - Print the constructed export URL on request (`export-url`).
//!
//! Invariants:
//! - Local and remote paths carry the same filter parameters, so both
//!   describe the same subset.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::args::FilterArgs;
use crate::formatters::output_result;
use fleet_client::{ExportFormat, endpoints, export, filter};
use fleet_config::Config;

pub async fn run(
    config: Config,
    filter_args: FilterArgs,
    format: &str,
    remote: bool,
    token: Option<String>,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let spec = filter_args.to_spec()?;
    let client = crate::commands::build_client(&config, token)?;

    let body = if remote {
        info!("Delegating export to the backend");
        client.fetch_export(&spec, format).await?
    } else {
        let events = client.fetch_events().await?;
        let visible = filter::apply(&events, &spec);
        info!(
            total = events.len(),
            exported = visible.len(),
            "Encoding export locally"
        );
        match format {
            ExportFormat::Json => export::to_json(&visible)?,
            ExportFormat::Csv => export::to_csv(&visible)?,
        }
    };

    output_result(&body, output_file.as_ref())?;
    Ok(())
}

/// Print the backend export URL for the given filter without fetching it.
pub fn run_url(config: Config, filter_args: FilterArgs, format: &str) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let spec = filter_args.to_spec()?;
    let url = endpoints::build_export_url(&config.base_url, &spec, format)?;
    println!("{url}");
    Ok(())
}
