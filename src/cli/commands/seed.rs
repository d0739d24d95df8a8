//! Seed command - write a fresh, untrained move memory

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    app::{App, SessionConfig, StoreFormat},
    cli::output::{format_number, print_kv, print_section},
    game::RuleModule,
    memory::MoveMemory,
    variants::{Hexapawn, TicTacToe, Variant},
};

#[derive(Parser, Debug)]
#[command(about = "Create a fresh move memory")]
pub struct SeedArgs {
    /// Game to seed a memory for
    #[arg(value_enum)]
    pub variant: Variant,

    /// Output path (defaults to the variant's memory file)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Encoding of the memory store
    #[arg(long, value_enum, default_value_t = StoreFormat::Flat)]
    pub format: StoreFormat,

    /// Replace an existing store
    #[arg(long)]
    pub force: bool,
}

fn seed<R: RuleModule>(app: &App, rules: R, config: &SessionConfig) -> Result<(usize, usize)> {
    let memory: MoveMemory<R::Move> = app
        .seed_store(&rules, config)
        .with_context(|| format!("failed to write {}", config.memory_path.display()))?;
    Ok((memory.len(), memory.move_count()))
}

pub fn execute(args: SeedArgs) -> Result<()> {
    let app = App::new();
    let config = super::session_config(args.variant, args.output, args.format, None);

    if config.memory_path.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to replace it",
            config.memory_path.display()
        );
    }

    let (positions, moves) = match args.variant {
        Variant::Hexapawn => seed(&app, Hexapawn, &config)?,
        Variant::TicTacToe => seed(&app, TicTacToe, &config)?,
    };

    print_section(&format!("Seeded {} memory", args.variant.name()));
    print_kv("File", &config.memory_path.display().to_string());
    print_kv("Positions", &format_number(positions));
    print_kv("Moves", &format_number(moves));
    Ok(())
}
