//! Slide Puzzle - terminal sliding tile puzzle.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use slide_puzzle::app_config::AppConfig;
use slide_puzzle::cli::Cli;
use slide_puzzle::tui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tui::run(config)
}

/// Loads the TOML configuration and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.set_seed(Some(seed));
    }
    if cli.shuffle {
        config.set_shuffle_on_start(true);
    }

    Ok(config)
}
