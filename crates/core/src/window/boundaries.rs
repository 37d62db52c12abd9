//! Calendar-day arithmetic in a single configured timezone.
//!
//! All day counts are measured in calendar dates, never in 24-hour chunks,
//! so windows that cross a DST change keep their day count.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

use super::error::{Result, WindowError};

/// Number of 15-minute steps probed past a skipped local midnight.
const GAP_PROBE_STEPS: i64 = 24 * 4;

/// Returns the first instant of `date` in `tz`.
///
/// When local midnight does not exist (a DST jump at 00:00) the day starts at
/// the first valid instant after the gap. When midnight is ambiguous the
/// earlier instant wins.
pub fn start_of_day(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=GAP_PROBE_STEPS)
        .find_map(|step| {
            midnight
                .checked_add_signed(TimeDelta::minutes(15 * step))
                .and_then(|probe| tz.from_local_datetime(&probe).earliest())
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

/// Returns the last millisecond of `date` in `tz`.
pub fn end_of_day(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    start_of_day(shift_days(date, 1), tz) - TimeDelta::milliseconds(1)
}

/// Shifts `date` by `days` calendar days, saturating at the supported range.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

/// Signed number of calendar days from `earlier` to `later`.
pub fn whole_days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// Parses a calendar date from navigation or query parameters.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose calendar date is taken
/// in `tz`.
pub fn parse_date(input: &str, tz: Tz) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.with_timezone(&tz).date_naive())
        })
        .map_err(|_| WindowError::InvalidDate(input.to_string()))
}
