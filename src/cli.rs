//! Command-line interface for strictly_series.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Series - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_series")]
#[command(about = "Play a tic-tac-toe series against a heuristic computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long, default_value = "strictly_series.toml")]
        config: PathBuf,

        /// Seed for the computer's random moves (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Computer thinking delay in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Echo every game event as a JSON line
        #[arg(long)]
        json_events: bool,
    },
}
