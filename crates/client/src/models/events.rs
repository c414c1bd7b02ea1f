//! Event models for the fleet events API.
//!
//! Responsibilities:
//! - Define the generalized `Event` shape covering both observed backend
//!   variants (`id`/`_id`, `name`/`robot`, `createdAt`/`timeCreated`).
//! - Keep field values verbatim; the fetch contract performs no per-entity
//!   validation or transformation.
//!
//! Invariants:
//! - A fetched event list is an immutable snapshot; events are never mutated
//!   in place.
//! - Serialization emits the canonical wire names (`createdAt`,
//!   `lastModified`, ...) so local exports round-trip against the backend's
//!   own export format.

use serde::{Deserialize, Serialize};

/// One row of backend event data.
///
/// `status` is carried as-is: the known values are `active`, `inactive`,
/// `pending`, `maintenance`, and `error`, but unrecognized tags must survive
/// deserialization untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(
        default,
        alias = "_id",
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Display label; `robot` in the fleet variant of the backend.
    #[serde(default, alias = "robot")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp, ISO-8601 expected but kept verbatim.
    #[serde(default, alias = "timeCreated", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}
