//! gagewatch CLI entry point.

use anyhow::Result;
use clap::Parser;
use gagewatch_cli::cli::Cli;
use gagewatch_cli::execute;
use gagewatch_core::config::WindowConfig;
use gagewatch_core::window::{parse_timestamp, parse_timezone, FixedClock, SystemClock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "error"
    } else {
        "gagewatch_cli=info,gagewatch_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = WindowConfig::from_env()?;
    if let Some(name) = &cli.timezone {
        config.timezone = parse_timezone(name)?;
    }
    tracing::debug!(timezone = config.timezone.name(), "loaded configuration");

    let output = match &cli.now {
        Some(now) => {
            let clock = FixedClock::new(parse_timestamp(now, config.timezone)?);
            execute(&cli.command, clock, &config, cli.format)?
        }
        None => execute(
            &cli.command,
            SystemClock::new(config.timezone),
            &config,
            cli.format,
        )?,
    };

    println!("{}", output);
    Ok(())
}
