//! Fleet CLI - search, filter, and export fleet events from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute commands against the fleet events backend via the shared
//!   client library.
//! - Render results as table, JSON, or CSV.
//!
//! Does NOT handle:
//! - Core client logic or the REST contract (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide
//!   clap env defaults.
//! - Command failures map to structured exit codes (see `error`).

mod args;
mod commands;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use error::ExitCode;
use fleet_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = commands::run_command(cli).await {
        let code = error::exit_code(&e);
        eprintln!("Error: {:#}", e);
        std::process::exit(code.as_i32());
    }
}
