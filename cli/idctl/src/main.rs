//! crid - CLI for coursehub ID tokens
//!
//! Encodes primary keys into the opaque tokens used in course, product and
//! instructor URLs, and decodes tokens found in links, logs and tickets.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(1);
        }
    };

    // Prefer RUST_LOG, fall back to the configured level. Logs go to stderr
    // so JSON output on stdout stays machine-readable.
    let log_level = cli.log_level().unwrap_or(&config.log_level).to_string();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
