//! CLI error types.

use gagewatch_core::window::WindowError;
use thiserror::Error;

/// Result type alias for the CLI crate.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
