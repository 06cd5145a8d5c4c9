//! Art Secretary - fills gaps in artist, album and track records from
//! Bandcamp pages.

use art_secretary::cli;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging (stderr, so --json output stays clean)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("art_secretary=info".parse()?))
        .init();

    cli::run_command(&args)
}
