//! Logout command implementation.

use anyhow::Result;

use fleet_config::TokenStore;

/// Forget the persisted session token.
///
/// The in-memory session and event snapshot die with the process; the
/// keyring entry is what has to be cleared explicitly.
pub fn run() -> Result<()> {
    let cleared = TokenStore::new()?.clear()?;
    if cleared {
        println!("Logged out; session token cleared.");
    } else {
        println!("No session token was stored.");
    }
    Ok(())
}
