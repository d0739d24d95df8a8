//! Subcommands of the `rote` binary

pub mod play;
pub mod seed;
pub mod stats;

use std::path::PathBuf;

use crate::{
    app::{SessionConfig, StoreFormat},
    variants::Variant,
};

/// Session config from common command-line flags
pub fn session_config(
    variant: Variant,
    memory: Option<PathBuf>,
    format: StoreFormat,
    seed: Option<u64>,
) -> SessionConfig {
    let path = memory.unwrap_or_else(|| variant.default_memory_path(format));
    let config = SessionConfig::new(path).with_format(format);
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}
