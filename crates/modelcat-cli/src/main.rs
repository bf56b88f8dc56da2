//! Modelcat command-line navigator
//!
//! Loads a catalog forest (or the built-in sample), applies one navigator
//! command, and prints the result as a table, JSON, or CSV.

mod commands;
mod config;
mod formatter;

use anyhow::Context;
use clap::Parser;
use config::{Args, CliConfig};
use modelcat_core::{sample_forest, Forest, NavigatorSession};

fn main() {
    let args = Args::parse();
    let config: CliConfig = args.into();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_directive().into()),
        )
        .init();

    if let Err(e) = run(config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    let forest = match &config.catalog {
        Some(path) => Forest::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => sample_forest()?,
    };
    tracing::debug!(nodes = forest.len(), "Catalog ready");

    let mut session = NavigatorSession::new(forest);
    let formatter = formatter::create_formatter(config.format);
    let output = commands::execute(&mut session, &config.command, &*formatter)?;

    println!("{}", output);
    Ok(())
}
