//! Types exchanged with the cursor's collaborators.
//!
//! These are pure data types with no I/O: navigation parameters coming in,
//! chart and picker bounds going out.

use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::boundaries::parse_date;
use super::clock::Clock;
use super::cursor::TimeRangeCursor;
use super::error::Result;
use crate::serde::deserialize_optional_date;

/// Optional `from`/`to` navigation parameters of a chart view.
///
/// Deserializing accepts plain `YYYY-MM-DD` dates only. [`RangeQuery::parse`]
/// also takes RFC 3339 timestamps because it knows the timezone to read the
/// calendar date in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeQuery {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<NaiveDate>,
}

impl RangeQuery {
    /// Parses raw parameter strings. Blank strings count as absent.
    pub fn parse(from: Option<&str>, to: Option<&str>, tz: Tz) -> Result<Self> {
        let parse = |value: Option<&str>| {
            value
                .filter(|s| !s.trim().is_empty())
                .map(|s| parse_date(s, tz))
                .transpose()
        };
        Ok(Self {
            from: parse(from)?,
            to: parse(to)?,
        })
    }

    /// Builds a cursor for these parameters.
    pub fn into_cursor<C: Clock>(self, clock: C) -> TimeRangeCursor<C> {
        TimeRangeCursor::new(clock, self.from, self.to)
    }
}

/// Bounds of a historical-reading query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub is_now: bool,
    pub days: u32,
}

/// Whole-day range selected in a date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerRange {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}
