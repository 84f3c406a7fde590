//! Path utilities: expand ~ and validate output paths.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~/` and require the result to be an absolute path.
pub fn absolute_output_path(path: &str) -> AppResult<PathBuf> {
    let expanded = expand_tilde(path);
    if !expanded.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {path}"
        )));
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_output_path_is_rejected() {
        assert!(absolute_output_path("gaps.csv").is_err());
    }

    #[test]
    fn absolute_output_path_is_kept() {
        let p = std::env::temp_dir().join("gaps.csv");
        let s = p.to_string_lossy().to_string();
        assert_eq!(absolute_output_path(&s).unwrap(), p);
    }

    #[test]
    fn plain_paths_are_not_expanded() {
        assert_eq!(expand_tilde("a/b"), PathBuf::from("a/b"));
    }
}
