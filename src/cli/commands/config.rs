use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config || !*check {
            info(format!("Configuration file: {}", path.display()));
            ConfigLogic::print(cfg)?;
        }

        // ---- CHECK CONFIG ----
        if *check {
            let report = ConfigLogic::check(path)?;
            if report.is_complete() {
                success(format!("{} is complete", path.display()));
            }
            for key in &report.missing {
                warning(format!("missing field '{key}' (default value is used)"));
            }
            for key in &report.unknown {
                warning(format!("unknown field '{key}' is ignored"));
            }
        }
    }

    Ok(())
}
