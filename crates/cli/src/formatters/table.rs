//! Events table formatter.
//!
//! Responsibilities:
//! - Format event lists as human-readable tables.
//!
//! Does NOT handle:
//! - Machine-readable formats (see the JSON/CSV paths in `mod.rs`).

use anyhow::Result;
use fleet_client::models::Event;

/// Format events as a fixed-width table.
pub fn format_events(events: &[Event]) -> Result<String> {
    let mut output = String::new();

    if events.is_empty() {
        output.push_str("No events found. Try adjusting or clearing the filters.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<26} {:<16} {:<12} {:<22} {}\n",
        "ID", "NAME", "STATUS", "CREATED", "DESCRIPTION"
    ));
    output.push_str(&format!(
        "{:<26} {:<16} {:<12} {:<22} {}\n",
        "==", "====", "======", "=======", "==========="
    ));

    for event in events {
        let id = event.id.as_deref().unwrap_or("-");
        let status = event.status.as_deref().unwrap_or("-");
        let created = event.created_at.as_deref().unwrap_or("-");
        let description = event.description.as_deref().unwrap_or("-");

        output.push_str(&format!(
            "{:<26} {:<16} {:<12} {:<22} {}\n",
            id, event.name, status, created, description
        ));
    }

    Ok(output)
}
