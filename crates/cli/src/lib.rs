//! gagewatch_cli - command-line front end for gagewatch chart windows.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use commands::{build_report, execute, PresetRow, WindowReport};
pub use error::{CliError, Result};
