//! Command execution, independent of the process environment.

use gagewatch_core::config::WindowConfig;
use gagewatch_core::window::{
    ChartWindow, Clock, PickerRange, RangePreset, RangeQuery, TimeRangeCursor,
};
use serde::Serialize;

use crate::cli::window::WindowArgs;
use crate::cli::{Commands, OutputFormat};
use crate::error::Result;
use crate::output::format_output;

/// Derived windows of a cursor after all range-change events were applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowReport {
    pub timezone: String,
    pub query: RangeQuery,
    pub chart: ChartWindow,
    pub picker: PickerRange,
}

impl WindowReport {
    pub fn from_cursor<C: Clock>(cursor: &TimeRangeCursor<C>) -> Self {
        Self {
            timezone: cursor.timezone().name().to_string(),
            query: cursor.to_query(),
            chart: cursor.chart_window(),
            picker: cursor.picker_range(),
        }
    }
}

/// One row of the `presets` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetRow {
    pub preset: RangePreset,
    pub days: u32,
}

/// Builds a cursor from `args` and replays its range-change events.
pub fn build_report<C: Clock>(
    clock: C,
    args: &WindowArgs,
    config: &WindowConfig,
) -> Result<WindowReport> {
    let mut cursor =
        TimeRangeCursor::from_params(clock, args.from.as_deref(), args.to.as_deref())?;

    if args.live {
        cursor.change_dates(None, None);
    } else if args.start.is_some() || args.end.is_some() {
        cursor.change_calendar_dates(args.start, args.end);
    }

    if let Some(days) = args.days {
        cursor.change_days(days);
    } else if let Some(preset) = args.preset {
        cursor.apply_preset(preset, config.full_range_days);
    }

    Ok(WindowReport::from_cursor(&cursor))
}

/// Lists every preset with the day count it resolves to under `config`.
pub fn preset_rows(config: &WindowConfig) -> Vec<PresetRow> {
    RangePreset::ALL
        .into_iter()
        .map(|preset| PresetRow {
            preset,
            days: preset.days(config.full_range_days),
        })
        .collect()
}

/// Runs `command` and renders its output.
pub fn execute<C: Clock>(
    command: &Commands,
    clock: C,
    config: &WindowConfig,
    format: OutputFormat,
) -> Result<String> {
    match command {
        Commands::Window(args) => {
            let report = build_report(clock, args, config)?;
            tracing::info!(
                is_now = report.chart.is_now,
                days = report.chart.days,
                "computed chart window"
            );
            format_output(&report, format)
        }
        Commands::Presets => {
            let rows = preset_rows(config);
            format_output(rows.as_slice(), format)
        }
    }
}
