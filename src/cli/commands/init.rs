use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command
///
/// Writes the configuration file with default values. An existing file is
/// only replaced with `--force`.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if path.exists() && !*force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default().save_to(path)?;
        tracing::info!(path = %path.display(), "config file written");
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
