//! Command-line interface for the slide puzzle.

use clap::Parser;
use std::path::PathBuf;

/// Slide Puzzle - 3x3 sliding tile puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "slide_puzzle")]
#[command(about = "Sliding tile puzzle for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for deterministic shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with a shuffled board instead of the solved picture
    #[arg(long)]
    pub shuffle: bool,
}
