use std::env;

use chrono_tz::Tz;

use crate::window::{parse_timezone, Result};

/// Timezone used when `GAGEWATCH_TIMEZONE` is not set.
pub const DEFAULT_TIMEZONE: &str = "America/Chicago";

/// Day count of the `full` range preset when `GAGEWATCH_FULL_RANGE_DAYS` is not set.
pub const DEFAULT_FULL_RANGE_DAYS: u32 = 30;

/// Window configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Timezone all date arithmetic is performed in.
    pub timezone: Tz,
    /// Day count of the `full` range preset.
    pub full_range_days: u32,
}

impl WindowConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GAGEWATCH_TIMEZONE` - IANA timezone name (default: "America/Chicago")
    /// - `GAGEWATCH_FULL_RANGE_DAYS` - days covered by the `full` preset (default: 30)
    ///
    /// An unknown timezone is an error. An unparsable or zero day count falls
    /// back to the default.
    pub fn from_env() -> Result<Self> {
        let timezone = match env::var("GAGEWATCH_TIMEZONE") {
            Ok(name) if !name.trim().is_empty() => parse_timezone(&name)?,
            _ => parse_timezone(DEFAULT_TIMEZONE)?,
        };
        let full_range_days = env::var("GAGEWATCH_FULL_RANGE_DAYS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_FULL_RANGE_DAYS);

        Ok(Self {
            timezone,
            full_range_days,
        })
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::Chicago,
            full_range_days: DEFAULT_FULL_RANGE_DAYS,
        }
    }
}
