//! Stats command - summarize what a move memory still knows

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, SessionConfig, StoreFormat},
    cli::output::{format_number, print_kv, print_section},
    game::GameMove,
    memory::{MoveMemory, seed_memory},
    variants::{Hexapawn, TicTacToe, Variant},
};

#[derive(Parser, Debug)]
#[command(about = "Show what a move memory contains")]
pub struct StatsArgs {
    /// Game the memory belongs to
    #[arg(value_enum)]
    pub variant: Variant,

    /// Move memory store (defaults to the variant's memory file)
    #[arg(long, short = 'm')]
    pub memory: Option<PathBuf>,

    /// Encoding of the memory store
    #[arg(long, value_enum, default_value_t = StoreFormat::Flat)]
    pub format: StoreFormat,

    /// List every position with its remaining moves
    #[arg(long)]
    pub list: bool,
}

/// Counts for a memory compared with a freshly seeded one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    pub positions: usize,
    pub moves: usize,
    pub seeded_positions: usize,
    pub seeded_moves: usize,
}

impl MemoryStats {
    pub fn compare<M: GameMove>(memory: &MoveMemory<M>, seeded: &MoveMemory<M>) -> Self {
        Self {
            positions: memory.len(),
            moves: memory.move_count(),
            seeded_positions: seeded.len(),
            seeded_moves: seeded.move_count(),
        }
    }

    /// Moves pruned since seeding
    pub fn forgotten(&self) -> usize {
        self.seeded_moves.saturating_sub(self.moves)
    }
}

fn report<M: GameMove>(memory: &MoveMemory<M>, seeded: &MoveMemory<M>, list: bool) {
    let stats = MemoryStats::compare(memory, seeded);
    print_kv(
        "Positions",
        &format!(
            "{} of {}",
            format_number(stats.positions),
            format_number(stats.seeded_positions)
        ),
    );
    print_kv(
        "Moves",
        &format!(
            "{} of {}",
            format_number(stats.moves),
            format_number(stats.seeded_moves)
        ),
    );
    print_kv("Forgotten", &format_number(stats.forgotten()));

    if list {
        println!();
        for (key, moves) in memory.iter() {
            let moves: Vec<String> = moves.iter().map(ToString::to_string).collect();
            println!("  {key}  {}", moves.join(" "));
        }
    }
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let app = App::new();
    let config: SessionConfig =
        super::session_config(args.variant, args.memory, args.format, None);
    let context = || format!("failed to load {}", config.memory_path.display());

    print_section(&format!("{} memory", args.variant.name()));
    print_kv("File", &config.memory_path.display().to_string());

    match args.variant {
        Variant::Hexapawn => {
            let memory = app.load_memory(&config).with_context(context)?;
            report(&memory, &seed_memory(&Hexapawn)?, args.list);
        }
        Variant::TicTacToe => {
            let memory = app.load_memory(&config).with_context(context)?;
            report(&memory, &seed_memory(&TicTacToe)?, args.list);
        }
    }
    Ok(())
}
