//! Event snapshot store with stale-fetch protection.
//!
//! Responsibilities:
//! - Own the authoritative event snapshot and the last fetch error.
//! - Serialize overlapping fetches with a monotonic generation counter so a
//!   slow, superseded response can never overwrite a newer one.
//!
//! Does NOT handle:
//! - Issuing the fetch itself (see `endpoints::events`).
//!
//! Invariants:
//! - Only the most recently issued generation may commit a result; stale
//!   completions are discarded wholesale.
//! - A failed fetch keeps the prior snapshot visible (stale-but-visible) and
//!   records the error; the snapshot is cleared only by `clear`, which is
//!   the logout path.

use crate::error::ClientError;
use crate::models::Event;

/// Ticket for one fetch attempt. Obtained from [`EventStore::begin_fetch`]
/// and redeemed with [`EventStore::complete_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchGeneration(u64);

/// Owns the event snapshot fetched from the backend.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    generation: u64,
    last_error: Option<String>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot. Treated as immutable: a new fetch replaces the
    /// whole list, nothing edits it in place.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start a fetch attempt, superseding any still-pending one.
    pub fn begin_fetch(&mut self) -> FetchGeneration {
        self.generation += 1;
        FetchGeneration(self.generation)
    }

    /// Commit a fetch result. Returns false (and changes nothing) when the
    /// ticket has been superseded by a newer `begin_fetch`.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchGeneration,
        result: Result<Vec<Event>, ClientError>,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(events) => {
                self.events = events;
                self.last_error = None;
            }
            Err(e) => {
                // Keep the prior snapshot; the caller shows the error
                // alongside whatever data is still held.
                self.last_error = Some(e.to_string());
            }
        }
        true
    }

    /// Drop the snapshot and any recorded error. Logout path only.
    pub fn clear(&mut self) {
        self.events.clear();
        self.last_error = None;
    }
}
