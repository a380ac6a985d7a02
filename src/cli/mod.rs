//! CLI interface for poly-buffer
//!
//! Provides subcommands for:
//! - `analyze`: Analyze a price log and recommend a buffer
//! - `config`: Show the effective configuration

mod analyze;

pub use analyze::AnalyzeArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "poly-buffer")]
#[command(about = "Recommend TRADE_PRICE_BUFFER from Polymarket price logs")]
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
    /// Analyze a price log and recommend a buffer
    Analyze(AnalyzeArgs),
    /// Show the effective configuration
    Config,
}
