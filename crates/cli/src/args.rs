//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Convert raw filter flags into a validated [`FilterSpec`].
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` module).
//! - Does not load configuration (see `commands::run_command`).

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use fleet_client::filter::{FilterSpec, StatusFilter, parse_timestamp};

#[derive(Parser)]
#[command(name = "fleet-cli")]
#[command(about = "Fleet events - search, filter, and export robot events", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  fleet-cli login --username admin\n  fleet-cli events --status active --name blackknight\n  fleet-cli events --date-from 2025-07-09 --date-to 2025-07-11 -o json\n  fleet-cli export --format csv --output-file events.csv\n  fleet-cli export-url --status error --format json\n"
)]
pub struct Cli {
    /// Base URL of the events backend (e.g., http://127.0.0.1:8000/v1)
    #[arg(short, long, global = true, env = "FLEET_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token (overrides the persisted session token)
    #[arg(short, long, global = true, env = "FLEET_API_TOKEN")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "FLEET_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Login and persist the session token
    Login {
        /// Username (prompted for when omitted)
        #[arg(short, long, env = "FLEET_USERNAME")]
        username: Option<String>,

        /// Password (prompted for securely when omitted)
        #[arg(short, long, env = "FLEET_PASSWORD")]
        password: Option<String>,
    },

    /// Forget the persisted session token
    Logout,

    /// Fetch events and filter them client-side
    Events {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the filtered events as JSON or CSV
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Export format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Let the backend render the export instead of encoding locally
        #[arg(long)]
        remote: bool,
    },

    /// Print the backend export URL without fetching it
    ExportUrl {
        #[command(flatten)]
        filter: FilterArgs,

        /// Export format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

/// Filter flags shared by `events`, `export`, and `export-url`.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Filter by name (case-insensitive substring)
    #[arg(long)]
    pub name: Option<String>,

    /// Include events created at or after this bound
    /// (YYYY-MM-DD or an RFC 3339 timestamp)
    #[arg(long, value_name = "DATE")]
    pub date_from: Option<String>,

    /// Include events created at or before this bound
    #[arg(long, value_name = "DATE")]
    pub date_to: Option<String>,

    /// Filter by exact status ("all" disables the filter)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by description (case-sensitive substring)
    #[arg(long)]
    pub description: Option<String>,
}

impl FilterArgs {
    /// Validate the raw flags into a [`FilterSpec`].
    pub fn to_spec(&self) -> Result<FilterSpec> {
        Ok(FilterSpec {
            name_query: self.name.clone().unwrap_or_default(),
            date_from: parse_date_flag("--date-from", self.date_from.as_deref())?,
            date_to: parse_date_flag("--date-to", self.date_to.as_deref())?,
            status: self
                .status
                .as_deref()
                .map(StatusFilter::parse)
                .unwrap_or_default(),
            description_query: self.description.clone().unwrap_or_default(),
        })
    }
}

fn parse_date_flag(
    flag: &str,
    raw: Option<&str>,
) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
    match raw {
        None => Ok(None),
        Some(value) => parse_timestamp(value).map(Some).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid {flag} value '{value}': expected YYYY-MM-DD or an RFC 3339 timestamp"
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_events_filter_flags_parse() {
        let cli = Cli::try_parse_from([
            "fleet-cli",
            "events",
            "--name",
            "blackknight",
            "--status",
            "active",
            "--date-from",
            "2025-07-09",
        ])
        .unwrap();

        let Commands::Events { filter } = cli.command else {
            panic!("expected events subcommand");
        };
        let spec = filter.to_spec().unwrap();
        assert_eq!(spec.name_query, "blackknight");
        assert_eq!(spec.status, StatusFilter::Is("active".to_string()));
        assert_eq!(spec.date_from, parse_timestamp("2025-07-09"));
        assert_eq!(spec.date_to, None);
    }

    #[test]
    fn test_status_all_disables_filter() {
        let cli = Cli::try_parse_from(["fleet-cli", "events", "--status", "all"]).unwrap();
        let Commands::Events { filter } = cli.command else {
            panic!("expected events subcommand");
        };
        assert_eq!(filter.to_spec().unwrap().status, StatusFilter::Any);
    }

    #[test]
    fn test_bad_date_flag_is_rejected() {
        let cli =
            Cli::try_parse_from(["fleet-cli", "events", "--date-from", "yesterday"]).unwrap();
        let Commands::Events { filter } = cli.command else {
            panic!("expected events subcommand");
        };
        let err = filter.to_spec().unwrap_err();
        assert!(err.to_string().contains("--date-from"));
    }

    #[test]
    fn test_no_filter_flags_yield_default_spec() {
        let cli = Cli::try_parse_from(["fleet-cli", "events"]).unwrap();
        let Commands::Events { filter } = cli.command else {
            panic!("expected events subcommand");
        };
        assert!(filter.to_spec().unwrap().is_empty());
    }
}
