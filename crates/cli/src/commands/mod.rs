//! CLI command implementations.

pub mod events;
pub mod export;
pub mod login;
pub mod logout;

use anyhow::Result;
use secrecy::SecretString;

use crate::args::{Cli, Commands};
use fleet_client::FleetClient;
use fleet_config::{Config, ConfigLoader, TokenStore};

/// Route the parsed CLI arguments to the matching command handler.
pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    let config = ConfigLoader::new()
        .with_base_url(cli.base_url.clone())
        .with_timeout_secs(cli.timeout)
        .apply_env()?
        .build()?;

    match cli.command {
        Commands::Login { username, password } => login::run(config, username, password).await,
        Commands::Logout => logout::run(),
        Commands::Events { filter } => {
            events::run(config, filter, cli.token, &cli.output, cli.output_file).await
        }
        Commands::Export {
            filter,
            format,
            remote,
        } => export::run(config, filter, &format, remote, cli.token, cli.output_file).await,
        Commands::ExportUrl { filter, format } => export::run_url(config, filter, &format),
    }
}

/// Build a client carrying the effective bearer token: the `--token`
/// override when given, otherwise the persisted one from the keyring.
pub(crate) fn build_client(config: &Config, token_override: Option<String>) -> Result<FleetClient> {
    let token = match token_override {
        Some(token) => Some(SecretString::new(token.into())),
        None => TokenStore::new()?.load()?,
    };

    Ok(FleetClient::builder()
        .base_url(config.base_url.clone())
        .timeout(config.timeout)
        .bearer_token(token)
        .build()?)
}
