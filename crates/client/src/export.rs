//! Export encoders for the event snapshot.
//!
//! Responsibilities:
//! - Serialize an event list to pretty-printed JSON or RFC 4180 CSV.
//! - Parse a previously exported CSV document back into events.
//!
//! Does NOT handle:
//! - File writing or any other download side effect (callers own that).
//! - The backend-delegated export URL (see `endpoints::export`).
//!
//! Invariants:
//! - CSV quoting is handled by the `csv` crate, so embedded quotes, commas,
//!   and newlines in free-text fields survive a round-trip.
//! - An absent field and an empty string collapse to the same CSV cell; the
//!   parser maps empty cells back to `None`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::models::Event;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ClientError::ExportFailed(
                "Format must be 'json' or 'csv'".to_string(),
            )),
        }
    }
}

/// One CSV row. Field order defines the column order of the header.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    status: String,
    description: String,
    created_at: String,
    last_modified: String,
}

impl From<&Event> for CsvRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone().unwrap_or_default(),
            name: event.name.clone(),
            status: event.status.clone().unwrap_or_default(),
            description: event.description.clone().unwrap_or_default(),
            created_at: event.created_at.clone().unwrap_or_default(),
            last_modified: event.last_modified.clone().unwrap_or_default(),
        }
    }
}

impl From<CsvRow> for Event {
    fn from(row: CsvRow) -> Self {
        let opt = |s: String| if s.is_empty() { None } else { Some(s) };
        Self {
            id: opt(row.id),
            name: row.name,
            status: opt(row.status),
            description: opt(row.description),
            created_at: opt(row.created_at),
            last_modified: opt(row.last_modified),
        }
    }
}

/// Serialize the literal event list as indented JSON.
pub fn to_json(events: &[Event]) -> Result<String> {
    serde_json::to_string_pretty(events).map_err(|e| ClientError::ExportFailed(e.to_string()))
}

/// Serialize the event list as CSV: a header row, then one row per event.
///
/// An empty list still yields the header row so downstream tooling can parse
/// the column set.
pub fn to_csv(events: &[Event]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    if events.is_empty() {
        writer
            .write_record([
                "id",
                "name",
                "status",
                "description",
                "created_at",
                "last_modified",
            ])
            .map_err(|e| ClientError::ExportFailed(e.to_string()))?;
    }
    for event in events {
        writer
            .serialize(CsvRow::from(event))
            .map_err(|e| ClientError::ExportFailed(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ClientError::ExportFailed(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ClientError::ExportFailed(e.to_string()))
}

/// Parse a CSV document produced by [`to_csv`] back into events.
///
/// Empty cells become `None`; there is no way to distinguish an exported
/// empty string from an absent field.
pub fn parse_csv(input: &str) -> Result<Vec<Event>> {
    let mut reader = csv::Reader::from_reader(input.as_bytes());
    let mut events = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|e| ClientError::ExportFailed(e.to_string()))?;
        events.push(row.into());
    }
    Ok(events)
}
