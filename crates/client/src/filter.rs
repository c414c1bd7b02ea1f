//! Client-side filter engine.
//!
//! Responsibilities:
//! - Define the user-controlled [`FilterSpec`] and evaluate it against an
//!   event snapshot.
//! - Tolerant timestamp parsing for the date-range predicates.
//!
//! Does NOT handle:
//! - Fetching events (see `endpoints::events`).
//! - Encoding a filter as export query parameters (see `endpoints::export`).
//!
//! Invariants:
//! - `apply` is pure and order-preserving: the result is always a
//!   subsequence of the input in the original order.
//! - Predicates are AND-combined; an empty predicate is skipped entirely.
//! - Predicates are fail-closed: an event missing (or carrying an
//!   unparseable value for) a field targeted by an active predicate is
//!   excluded.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::Event;

/// Status constraint. The UI sentinel `"all"` and the empty string both mean
/// "no constraint"; anything else must match the event's status exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Is(String),
}

impl StatusFilter {
    /// Parse a raw status input, folding the `"all"`/empty sentinels to
    /// [`StatusFilter::Any`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::Any
        } else {
            Self::Is(trimmed.to_string())
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// The user-controlled set of constraints narrowing the visible event list.
///
/// Created all-empty (no constraints), mutated field-by-field by the caller,
/// and reset by replacing it with `FilterSpec::default()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring match against the event name.
    pub name_query: String,
    /// Inclusive lower bound on the creation timestamp.
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the creation timestamp.
    pub date_to: Option<DateTime<Utc>>,
    pub status: StatusFilter,
    /// Case-sensitive substring match against the event description.
    pub description_query: String,
}

impl FilterSpec {
    /// True when no predicate is active, i.e. `apply` is the identity.
    pub fn is_empty(&self) -> bool {
        self.name_query.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.status.is_any()
            && self.description_query.is_empty()
    }
}

/// Apply the filter, producing the visible subset.
///
/// Deterministic and total: the same snapshot and spec always yield the same
/// ordered subsequence. The snapshot itself is never mutated.
pub fn apply(events: &[Event], spec: &FilterSpec) -> Vec<Event> {
    events
        .iter()
        .filter(|event| matches(event, spec))
        .cloned()
        .collect()
}

fn matches(event: &Event, spec: &FilterSpec) -> bool {
    if !spec.name_query.is_empty()
        && !event
            .name
            .to_lowercase()
            .contains(&spec.name_query.to_lowercase())
    {
        return false;
    }

    if spec.date_from.is_some() || spec.date_to.is_some() {
        let Some(created) = event.created_at.as_deref().and_then(parse_timestamp) else {
            return false;
        };
        if let Some(from) = spec.date_from
            && created < from
        {
            return false;
        }
        if let Some(to) = spec.date_to
            && created > to
        {
            return false;
        }
    }

    if let StatusFilter::Is(wanted) = &spec.status
        && event.status.as_deref() != Some(wanted.as_str())
    {
        return false;
    }

    if !spec.description_query.is_empty() {
        match &event.description {
            Some(description) if description.contains(&spec.description_query) => {}
            _ => return false,
        }
    }

    true
}

/// Parse a timestamp the way the backend emits them: RFC 3339, a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` (assumed UTC), or a bare `YYYY-MM-DD` date
/// (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
