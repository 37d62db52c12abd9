//! Serde helpers for navigation and query parameters.
//!
//! Parameters arrive as strings, and an empty string means "not set".

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
///
/// RFC 3339 timestamps are rejected: without the configured timezone there
/// is no local calendar date to take from them. Use
/// [`crate::window::RangeQuery::parse`] for timestamp parameters.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
