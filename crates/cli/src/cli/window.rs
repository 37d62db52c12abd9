//! Window CLI command.

use chrono::NaiveDate;
use clap::Args;
use gagewatch_core::window::RangePreset;

/// Arguments of the `window` command.
///
/// `--from`/`--to` create the cursor the way a chart view would from its
/// navigation parameters. The remaining flags replay range-change events:
/// the date selection first, then the day count.
#[derive(Debug, Clone, Default, Args)]
pub struct WindowArgs {
    /// Initial `from` parameter (YYYY-MM-DD or RFC 3339).
    #[arg(long)]
    pub from: Option<String>,
    /// Initial `to` parameter (YYYY-MM-DD or RFC 3339). Omit for a live window.
    #[arg(long)]
    pub to: Option<String>,
    /// Change the day count.
    #[arg(long, conflicts_with = "preset")]
    pub days: Option<u32>,
    /// Change the day count using a preset (2d, 7d, 14d, full).
    #[arg(long)]
    pub preset: Option<RangePreset>,
    /// Date-picker selection: first day (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Date-picker selection: last day (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// Clear the date selection and return to the live window.
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub live: bool,
}
