//! Strictly Series - terminal client
//!
//! Plays a tic-tac-toe series against the heuristic computer on stdin/stdout.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_series::GameConfig;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
            json_events,
        } => {
            let config = load_config(&config, seed, delay_ms)?;
            terminal::run(config, json_events).await
        }
    }
}

#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(
    path: &std::path::Path,
    seed: Option<u64>,
    delay_ms: Option<u64>,
) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(path)?;

    if let Some(seed) = seed {
        info!(seed, "Overriding seed");
        config = config.with_seed(seed);
    }
    if let Some(delay_ms) = delay_ms {
        info!(delay_ms, "Overriding computer delay");
        config = config.with_computer_delay_ms(delay_ms);
    }

    Ok(config)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
