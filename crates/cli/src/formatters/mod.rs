//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table, JSON, and CSV renderings of an event list.
//! - Route output to stdout or a file.
//!
//! Does NOT handle:
//! - Filtering (see `fleet-client`'s filter engine).
//! - The encoding itself for JSON/CSV (delegated to `fleet-client`'s export
//!   encoders so local exports and `events -o json|csv` stay identical).
//!
//! Empty-state handling follows the machine-vs-human split: JSON renders
//! `[]`, CSV renders the header row only, and the table prints a human
//! message.

mod common;
mod table;

use anyhow::Result;
use fleet_client::models::Event;

pub use common::output_result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: table, json, csv",
                s
            ),
        }
    }
}

/// Render the event list in the requested format.
pub fn format_events(events: &[Event], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => table::format_events(events),
        OutputFormat::Json => Ok(fleet_client::export::to_json(events)?),
        OutputFormat::Csv => Ok(fleet_client::export::to_csv(events)?),
    }
}
