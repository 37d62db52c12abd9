//! CLI command definitions.

pub mod window;

use clap::{Parser, Subcommand, ValueEnum};

/// Chart window calculator for river-gage readings.
#[derive(Debug, Parser)]
#[command(name = "gagewatch")]
#[command(version, about = "Chart window calculator for river-gage readings", long_about = None)]
pub struct Cli {
    /// IANA timezone for all date arithmetic (overrides the config default).
    #[arg(long, env = "GAGEWATCH_TIMEZONE")]
    pub timezone: Option<String>,

    /// Pin "now" to an RFC 3339 timestamp instead of reading the system clock.
    #[arg(long)]
    pub now: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Only log errors.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the chart and date-picker windows for a range.
    Window(window::WindowArgs),
    /// List the range-selector presets.
    Presets,
}
