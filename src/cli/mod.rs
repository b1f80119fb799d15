//! CLI interface for papersim
//!
//! Provides subcommands for:
//! - `replay`: Replay a ticker's history as a live tick feed
//! - `stats`: Aggregate statistics over a closed-trade file
//! - `config`: Show resolved configuration

mod replay;
mod stats;

pub use replay::ReplayArgs;
pub use stats::StatsArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "papersim")]
#[command(about = "Paper-trading simulator over historical candle data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a ticker's history as a tick-by-tick feed
    Replay(ReplayArgs),
    /// Compute portfolio statistics from a closed-trade file
    Stats(StatsArgs),
    /// Show resolved configuration
    Config,
}
