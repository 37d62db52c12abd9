use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::WindowError;

/// Day count used when no explicit range is requested.
pub const DEFAULT_DAYS: u32 = 2;

/// Day-count choices offered by the range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangePreset {
    #[serde(rename = "2d")]
    Default,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "14d")]
    Fortnight,
    #[serde(rename = "full")]
    Full,
}

impl RangePreset {
    pub const ALL: [RangePreset; 4] = [
        RangePreset::Default,
        RangePreset::Week,
        RangePreset::Fortnight,
        RangePreset::Full,
    ];

    /// Resolves the preset to a day count. `Full` spans `full_days`.
    pub fn days(self, full_days: u32) -> u32 {
        match self {
            RangePreset::Default => DEFAULT_DAYS,
            RangePreset::Week => 7,
            RangePreset::Fortnight => 14,
            RangePreset::Full => full_days,
        }
    }

    /// Short label, as accepted by [`FromStr`].
    pub fn label(self) -> &'static str {
        match self {
            RangePreset::Default => "2d",
            RangePreset::Week => "7d",
            RangePreset::Fortnight => "14d",
            RangePreset::Full => "full",
        }
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for RangePreset {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        RangePreset::ALL
            .into_iter()
            .find(|preset| preset.label() == normalized)
            .ok_or_else(|| WindowError::UnknownPreset(s.to_string()))
    }
}
