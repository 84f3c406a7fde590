//! framegap library root.
//! Exposes the gap analyzer, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::calculator::find_missing_ranges;
pub use crate::errors::{AppError, AppResult};
pub use crate::models::{AnalysisResult, FrameSet, GapRange};

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use clap::Parser;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once, honouring --config (init rewrites it, so skip parsing)
    let config_path = Config::resolve_path(cli.config.as_deref());
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    // 3. hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
