//! rote - console games against a self-pruning move memory
//!
//! This CLI provides:
//! - Interactive hexapawn and tic-tac-toe games
//! - Seeding of fresh move memories
//! - Inspection of what a memory still knows

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "rote")]
#[command(version, about = "Rote-learning engine for small board games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(rote::cli::commands::play::PlayArgs),

    /// Write a freshly seeded move memory
    Seed(rote::cli::commands::seed::SeedArgs),

    /// Summarize a move memory
    Stats(rote::cli::commands::stats::StatsArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => rote::cli::commands::play::execute(args),
        Commands::Seed(args) => rote::cli::commands::seed::execute(args),
        Commands::Stats(args) => rote::cli::commands::stats::execute(args),
    }
}
