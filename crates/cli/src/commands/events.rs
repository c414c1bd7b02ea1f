//! Events command implementation.
//!
//! Responsibilities:
//! - Fetch the event snapshot, apply the client-side filter, and render the
//!   visible subset.
//!
//! Does NOT handle:
//! - Server-side filtering; the full collection is fetched and narrowed
//!   locally.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::args::FilterArgs;
use crate::formatters::{OutputFormat, format_events, output_result};
use fleet_client::{EventStore, filter};
use fleet_config::Config;

pub async fn run(
    config: Config,
    filter_args: FilterArgs,
    token: Option<String>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let spec = filter_args.to_spec()?;
    let client = crate::commands::build_client(&config, token)?;

    info!("Fetching events");
    let mut store = EventStore::new();
    let ticket = store.begin_fetch();
    let fetched = client.fetch_events().await?;
    store.complete_fetch(ticket, Ok(fetched));

    let visible = filter::apply(store.events(), &spec);
    if format == OutputFormat::Table {
        eprintln!(
            "Showing {} of {} events",
            visible.len(),
            store.events().len()
        );
    }

    let rendered = format_events(&visible, format)?;
    output_result(&rendered, output_file.as_ref())?;

    Ok(())
}
