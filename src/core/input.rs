//! Loading of frame lists from files or stdin.

use crate::errors::AppResult;
use crate::models::FrameSet;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// `.json` files and documents starting with a JSON token are JSON, the rest is text
    #[default]
    Auto,
    Json,
    Text,
}

impl InputFormat {
    /// Resolve `Auto` using the file extension first, then the content.
    fn resolve(self, source: Option<&Path>, content: &str) -> InputFormat {
        if self != InputFormat::Auto {
            return self;
        }

        if let Some(ext) = source.and_then(|p| p.extension()) {
            if ext.eq_ignore_ascii_case("json") {
                return InputFormat::Json;
            }
            if ext.eq_ignore_ascii_case("txt") {
                return InputFormat::Text;
            }
        }

        match content.trim_start().chars().next() {
            Some('[' | '{' | '"') => InputFormat::Json,
            _ => InputFormat::Text,
        }
    }
}

/// Parse frame numbers from an in-memory document.
///
/// Fails with `AppError::InputTooLarge` once more than `max_frames` entries
/// are found, before any later element is looked at.
pub fn parse_frames(
    content: &str,
    format: InputFormat,
    source: Option<&Path>,
    max_frames: usize,
) -> AppResult<FrameSet> {
    match format.resolve(source, content) {
        InputFormat::Json => FrameSet::from_json_str(content, max_frames),
        _ => FrameSet::from_text_capped(content, max_frames),
    }
}

/// Read frame numbers from `source`, or from stdin when it is `None` or `-`.
///
/// Rejects inputs holding more than `max_frames` entries.
pub fn read_frame_set(
    source: Option<&str>,
    format: InputFormat,
    max_frames: usize,
) -> AppResult<FrameSet> {
    let (content, path) = match source {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            (buf, None)
        }
        Some(file) => {
            let path = Path::new(file);
            (fs::read_to_string(path)?, Some(path))
        }
    };

    let frames = parse_frames(&content, format, path, max_frames)?;

    tracing::info!(
        source = source.unwrap_or("-"),
        frames = frames.len(),
        "frame list loaded"
    );
    Ok(frames)
}
