//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;
use crate::commands::{PresetRow, WindowReport};
use crate::error::Result;

/// Values with a human-readable rendering.
pub trait Pretty {
    fn format_pretty(&self) -> String;
}

impl Pretty for WindowReport {
    fn format_pretty(&self) -> String {
        pretty::format_report(self)
    }
}

impl Pretty for [PresetRow] {
    fn format_pretty(&self) -> String {
        pretty::format_presets(self)
    }
}

/// Format a value for output.
pub fn format_output<T>(value: &T, format: OutputFormat) -> Result<String>
where
    T: serde::Serialize + Pretty + ?Sized,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => Ok(value.format_pretty()),
    }
}
