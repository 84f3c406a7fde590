use crate::core::input::InputFormat;
use crate::core::report::OutputFormat;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by `framegap init`, used by `config --check`.
pub const KNOWN_FIELDS: &[&str] = &[
    "default_input",
    "default_output",
    "max_frames",
    "show_gap_list",
    "max_listed_gaps",
    "separator_char",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_input: InputFormat,
    #[serde(default)]
    pub default_output: OutputFormat,
    #[serde(default = "default_max_frames")]
    pub max_frames: usize,
    #[serde(default = "default_show_gap_list")]
    pub show_gap_list: bool,
    #[serde(default = "default_max_listed_gaps")]
    pub max_listed_gaps: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_max_frames() -> usize {
    10_000_000
}
fn default_show_gap_list() -> bool {
    true
}
fn default_max_listed_gaps() -> usize {
    50
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_input: InputFormat::default(),
            default_output: OutputFormat::default(),
            max_frames: default_max_frames(),
            show_gap_list: default_show_gap_list(),
            max_listed_gaps: default_max_listed_gaps(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.framegap`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".framegap")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("framegap.conf")
    }

    /// Config file to use: the `--config` override if given, the default otherwise
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
