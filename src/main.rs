//! walmart-normalizer - Normalize scraped Walmart listing exports
//!
//! Reads a JSON array of scraped records and writes the normalized products.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use walmart_normalizer::commands::NormalizeCommand;
use walmart_normalizer::config::Config;

#[derive(Parser)]
#[command(
    name = "walmart-normalizer",
    version,
    about = "Normalize Walmart product export data",
    long_about = "Converts scraped Walmart listing records into a normalized schema with \
                  parsed prices, ratings, review counts, and variants."
)]
struct Cli {
    /// Path to input JSON file [default: walmart-2025-12-27.json]
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path to output JSON file [default: walmart-2025-12-27.normalized.json]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config, then apply CLI overrides
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    let summary = NormalizeCommand::new(config).execute()?;
    println!("{}", summary);

    Ok(())
}
