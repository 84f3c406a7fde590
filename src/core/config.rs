use crate::config::{Config, KNOWN_FIELDS};
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Result of `config --check`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigCheck {
    /// Known keys absent from the file (their default is used)
    pub missing: Vec<String>,
    /// Keys present in the file but not recognized
    pub unknown: Vec<String>,
}

impl ConfigCheck {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Compare the keys of the config file at `path` with the known fields.
    pub fn check(path: &Path) -> AppResult<ConfigCheck> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;

        let keys: Vec<String> = match yaml.as_mapping() {
            Some(map) => map
                .keys()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect(),
            None if yaml.is_null() => Vec::new(),
            None => {
                return Err(AppError::Config(
                    "config file must contain a YAML mapping".to_string(),
                ));
            }
        };

        let missing = KNOWN_FIELDS
            .iter()
            .filter(|f| !keys.iter().any(|k| k.as_str() == **f))
            .map(|f| f.to_string())
            .collect();

        let unknown = keys
            .into_iter()
            .filter(|k| !KNOWN_FIELDS.contains(&k.as_str()))
            .collect();

        Ok(ConfigCheck { missing, unknown })
    }
}
