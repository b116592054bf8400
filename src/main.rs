//! Ingest relay server entry point.

use anyhow::{Context, Result};
use clap::Parser;
use ingest_relay::cli::Cli;
use ingest_relay::config::Resolver;
use ingest_relay::{logging, AppContext};
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut resolver = Resolver::new().with_overrides(cli.overrides());
    if let Some(path) = &cli.config {
        resolver = resolver.with_file(path);
    }
    let config = resolver.resolve().context("failed to read config file")?;

    let ctx = AppContext::builder().with_config(config).build()?;
    logging::init(ctx.log_level())?;
    debug!("Verbose logging enabled");

    let config = ctx.config();
    info!("Starting server on port {}", config.port);
    debug!(?config, "Starting server with config");

    Ok(())
}
