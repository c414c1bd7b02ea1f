//! Serde helpers for the backend's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Accept identifiers that arrive as JSON strings or numbers and normalize
//!   them to `String`.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (the fetch contract returns entities
//!   verbatim).
//!
//! Invariants / assumptions:
//! - Depending on the backend variant, `id` may be a Mongo-style `_id` hex
//!   string or a numeric row id; both must parse to the same model field.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn opt_string_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(StringOrNumber::String(s)) => Ok(Some(s)),
        Some(StringOrNumber::U64(v)) => Ok(Some(v.to_string())),
        Some(StringOrNumber::I64(v)) => Ok(Some(v.to_string())),
        Some(StringOrNumber::F64(v)) => Ok(Some(v.to_string())),
    }
}
