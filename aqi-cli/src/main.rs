//! Binary crate for the `aqi` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Running the HTTP server and one-shot lookups

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod server;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = cli::Cli::parse();
    init_logging(&cmd.log_level)?;
    cmd.run().await
}

/// `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}
