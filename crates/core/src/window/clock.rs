//! Sources of "the current moment".
//!
//! Live windows must track real time across repeated reads, so every caller
//! asks its [`Clock`] for `now()` at access time instead of caching it.

use std::cell::Cell;

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;

use super::error::{Result, WindowError};

/// A source of the current moment in a configured timezone.
pub trait Clock {
    /// The current moment, expressed in [`Clock::timezone`].
    fn now(&self) -> DateTime<Tz>;

    /// The timezone all date arithmetic is performed in.
    fn timezone(&self) -> Tz {
        self.now().timezone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Tz> {
        (**self).now()
    }

    fn timezone(&self) -> Tz {
        (**self).timezone()
    }
}

/// Reads the system time on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}

/// A clock that only moves when told to.
///
/// Used by tests and by reproducible CLI runs (`--now`).
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Tz>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Tz>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Moves the clock to an absolute instant.
    pub fn set(&self, now: DateTime<Tz>) {
        self.now.set(now);
    }

    /// Moves the clock forward (or backward, for a negative delta).
    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.now.get()
    }
}

/// Parses an IANA timezone name such as `"America/Chicago"`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| WindowError::UnknownTimezone(name.to_string()))
}

/// Parses an RFC 3339 timestamp and expresses it in `tz`.
pub fn parse_timestamp(input: &str, tz: Tz) -> Result<DateTime<Tz>> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.with_timezone(&tz))
        .map_err(|_| WindowError::InvalidTimestamp(input.to_string()))
}
