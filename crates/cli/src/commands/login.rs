//! Login command implementation.
//!
//! Responsibilities:
//! - Collect credentials (prompting for whatever was not provided).
//! - Perform the login, persist a returned token, and run the triggered
//!   initial event fetch.
//!
//! Does NOT handle:
//! - The login HTTP contract (see `fleet-client`).
//!
//! Invariants:
//! - Passwords are prompted with hidden input and held as `SecretString`.
//! - A failed login leaves any previously persisted token untouched.

use anyhow::Result;
use tracing::info;

use fleet_client::{Credentials, EventStore, FleetClient, SessionStore};
use fleet_config::{Config, TokenStore};

pub async fn run(
    config: Config,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let username = match username {
        Some(username) => username,
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .allow_empty_password(false)
            .interact()?,
    };

    let mut client = FleetClient::builder()
        .base_url(config.base_url.clone())
        .timeout(config.timeout)
        .build()?;

    let mut session = SessionStore::new();
    session.begin_login();

    match client.login(&Credentials::new(username, password)).await {
        Ok(outcome) => {
            if let Some(token) = &outcome.token {
                TokenStore::new()?.save(token)?;
                info!("Session token persisted");
            }
            println!("Logged in as {}", outcome.user.username);
            session.login_succeeded(outcome.user);

            // A successful login triggers one event fetch.
            let mut events = EventStore::new();
            let ticket = events.begin_fetch();
            events.complete_fetch(ticket, client.fetch_events().await);
            match events.last_error() {
                None => println!("{} events available", events.events().len()),
                Some(err) => eprintln!("Warning: initial event fetch failed: {err}"),
            }
            Ok(())
        }
        Err(e) => {
            session.login_failed(&e);
            Err(e.into())
        }
    }
}
