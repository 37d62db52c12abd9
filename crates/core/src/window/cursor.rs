//! The chart time-range cursor.
//!
//! A cursor owns the currently displayed date window of a time-series chart.
//! It derives two pairs of boundaries from the same state:
//!
//! - *input* dates, always whole days, used to seed a date picker;
//! - *chart* dates, used to bound data queries. In live mode these roll with
//!   the clock so the chart shows readings up to the current instant.
//!
//! All arithmetic happens in the timezone of the injected [`Clock`].

use chrono::{DateTime, NaiveDate, TimeDelta};
use chrono_tz::Tz;

use super::boundaries::{end_of_day, shift_days, start_of_day, whole_days_between};
use super::clock::Clock;
use super::error::Result;
use super::presets::{RangePreset, DEFAULT_DAYS};
use super::query::{ChartWindow, PickerRange, RangeQuery};

/// Largest accepted day count (roughly a century).
///
/// Caps the day count so `now - days` and day shifts stay inside chrono's
/// representable range; `change_days(u32::MAX)` would otherwise panic.
/// Counts above the cap all resolve to the same window.
pub const MAX_DAYS: u32 = 36_600;

/// Current displayed date window of a chart.
#[derive(Debug, Clone)]
pub struct TimeRangeCursor<C: Clock> {
    clock: C,
    end: DateTime<Tz>,
    is_now: bool,
    days: u32,
    input_end: DateTime<Tz>,
}

impl<C: Clock> TimeRangeCursor<C> {
    /// Creates a cursor from optional `from`/`to` calendar dates.
    ///
    /// Without `to` (or with `to` equal to today) the cursor is live. Without
    /// `from` the window spans [`DEFAULT_DAYS`].
    pub fn new(clock: C, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let tz = clock.timezone();
        let now = clock.now();
        let end = to.map_or(now, |date| start_of_day(date, tz));
        let is_now = to.is_none_or(|date| date == now.date_naive());
        let days = from.map_or(DEFAULT_DAYS, |from| {
            clamp_days(whole_days_between(end.date_naive(), from).abs() + 1)
        });

        tracing::debug!(?from, ?to, is_now, days, "created time range cursor");

        Self {
            clock,
            end,
            is_now,
            days,
            input_end: end,
        }
    }

    /// Creates a cursor from raw navigation parameters.
    ///
    /// Blank strings count as absent.
    pub fn from_params(clock: C, from: Option<&str>, to: Option<&str>) -> Result<Self> {
        let query = RangeQuery::parse(from, to, clock.timezone())?;
        Ok(query.into_cursor(clock))
    }

    pub fn is_now(&self) -> bool {
        self.is_now
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// The end anchor the cursor was created with.
    pub fn anchor_end(&self) -> DateTime<Tz> {
        self.end
    }

    pub fn timezone(&self) -> Tz {
        self.clock.timezone()
    }

    /// Start of the whole-day range shown in a date picker.
    pub fn input_start_date(&self) -> DateTime<Tz> {
        let offset = i64::from(self.days) - 1;
        start_of_day(
            shift_days(self.input_end.date_naive(), -offset),
            self.timezone(),
        )
    }

    /// End of the whole-day range shown in a date picker.
    pub fn input_end_date(&self) -> DateTime<Tz> {
        let date = if self.is_now {
            self.clock.now().date_naive()
        } else {
            self.input_end.date_naive()
        };
        start_of_day(date, self.timezone())
    }

    /// Lower query bound. Live windows roll: exactly `days` days before now.
    pub fn chart_start_date(&self) -> DateTime<Tz> {
        if self.is_now {
            self.clock.now() - TimeDelta::days(i64::from(self.days))
        } else {
            self.input_start_date()
        }
    }

    /// Upper query bound: now when live, otherwise the end of the last day.
    pub fn chart_end_date(&self) -> DateTime<Tz> {
        if self.is_now {
            self.clock.now()
        } else {
            end_of_day(self.input_end.date_naive(), self.timezone())
        }
    }

    /// Overwrites the day count without touching the mode or end date.
    ///
    /// Counts outside `1..=MAX_DAYS` are clamped.
    pub fn change_days(&mut self, days: u32) {
        self.days = clamp_days(i64::from(days));
        tracing::debug!(days = self.days, is_now = self.is_now, "changed day count");
    }

    /// Applies a range-selector preset. `Full` spans `full_days`.
    pub fn apply_preset(&mut self, preset: RangePreset, full_days: u32) {
        tracing::debug!(%preset, "applying range preset");
        self.change_days(preset.days(full_days));
    }

    /// Applies an explicit date selection.
    ///
    /// - Neither bound: back to the live default window.
    /// - Only `start`: pin the start and keep the current end; the cursor
    ///   stops tracking now.
    /// - `end` (with or without `start`): an end day that has not finished
    ///   yet snaps to live, otherwise the window ends on that day. With a
    ///   `start` the day count spans both days inclusively; without one the
    ///   current day count is kept and the window slides.
    pub fn change_dates(&mut self, start: Option<DateTime<Tz>>, end: Option<DateTime<Tz>>) {
        let tz = self.timezone();
        let start_date = start.map(|dt| dt.with_timezone(&tz).date_naive());

        match (start_date, end) {
            (None, None) => {
                self.is_now = true;
                self.days = DEFAULT_DAYS;
                tracing::debug!("reset to live window");
            }
            (Some(start_date), None) => {
                self.is_now = false;
                self.days =
                    clamp_days(whole_days_between(self.input_end.date_naive(), start_date) + 1);
                tracing::debug!(%start_date, days = self.days, "pinned window start");
            }
            (start_date, Some(end)) => {
                let now = self.clock.now();
                let end_date = end.with_timezone(&tz).date_naive();

                if end_of_day(end_date, tz) >= now {
                    self.is_now = true;
                    self.input_end = now;
                } else {
                    self.is_now = false;
                    self.input_end = start_of_day(end_date, tz);
                }

                if let Some(start_date) = start_date {
                    self.days = clamp_days(
                        whole_days_between(self.input_end.date_naive(), start_date) + 1,
                    );
                }

                tracing::debug!(
                    ?start_date,
                    %end_date,
                    is_now = self.is_now,
                    days = self.days,
                    "changed date range"
                );
            }
        }
    }

    /// [`TimeRangeCursor::change_dates`] for whole calendar days.
    pub fn change_calendar_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        let tz = self.timezone();
        self.change_dates(
            start.map(|date| start_of_day(date, tz)),
            end.map(|date| start_of_day(date, tz)),
        );
    }

    /// Bounds for the data-fetching collaborator.
    pub fn chart_window(&self) -> ChartWindow {
        ChartWindow {
            start: self.chart_start_date().fixed_offset(),
            end: self.chart_end_date().fixed_offset(),
            is_now: self.is_now,
            days: self.days,
        }
    }

    /// Whole-day bounds for the date-picker collaborator.
    pub fn picker_range(&self) -> PickerRange {
        PickerRange {
            start: self.input_start_date().fixed_offset(),
            end: self.input_end_date().fixed_offset(),
        }
    }

    /// Navigation parameters that recreate this window.
    ///
    /// Live windows omit `to` so the recreated cursor keeps tracking now,
    /// and count `from` back from today so the day count survives midnight.
    pub fn to_query(&self) -> RangeQuery {
        let end = self.input_end_date().date_naive();
        let from = if self.is_now {
            shift_days(end, -(i64::from(self.days) - 1))
        } else {
            self.input_start_date().date_naive()
        };
        RangeQuery {
            from: Some(from),
            to: (!self.is_now).then_some(end),
        }
    }
}

fn clamp_days(requested: i64) -> u32 {
    let clamped = requested.clamp(1, i64::from(MAX_DAYS));
    if clamped != requested {
        tracing::warn!(requested, clamped, "day count out of range, clamping");
    }
    clamped as u32
}
