//! String ⇄ timestamp codec for HAR date-time scalars.
//!
//! HAR encodes timestamps as RFC 3339 strings with an offset
//! (e.g. `2017-03-19T20:52:34.000+01:00`).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Deserialize an optional RFC 3339 timestamp. An absent or `null` field
/// yields `None`; a malformed string is a type error.
pub(crate) fn rfc3339_opt<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(&raw).map(Some).map_err(|e| {
            serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e))
        }),
    }
}
