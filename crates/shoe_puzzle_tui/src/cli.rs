//! Command-line interface for the shoe puzzle.

use clap::Parser;
use std::path::PathBuf;

/// Shoe Puzzle - bring the red and blue shoes together
#[derive(Parser, Debug)]
#[command(name = "shoe_puzzle")]
#[command(about = "Sliding block puzzle with shoes, played in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
