//! Entry point for the `srtd` binary.

use anyhow::{Context, Result};
use clap::Parser;
use srt_panic::{initialize_panic_handler, PanicContextBuilder, StdConsole};
use srtd::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level.as_deref())?;

    let panic_context = PanicContextBuilder::new().with_console(StdConsole).build()?;
    initialize_panic_handler(panic_context)?;

    let output = srtd::run(&cli).with_context(|| format!("{:?} failed", cli.command))?;
    println!("{output}");
    Ok(())
}

/// Initialize the tracing system for logging
fn initialize_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(directives) => EnvFilter::try_new(directives).context("invalid --log-level filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
