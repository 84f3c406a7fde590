//! Unified application error type.
//! The analyzer, the input loader, the config layer and the CLI all return
//! AppError so the binary has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Frame input
    // ---------------------------
    /// The input is not an ordered sequence of elements.
    #[error("frames must be a sequence: {0}")]
    Shape(String),

    /// An element is not a positive integer (non-integer, zero or negative).
    #[error("frames must contain positive integers only (index {index}: {value})")]
    Element { index: usize, value: String },

    #[error("too many frames: {count} read, limit is {limit}")]
    InputTooLarge { count: usize, limit: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub(crate) fn element(index: usize, value: impl ToString) -> Self {
        AppError::Element {
            index,
            value: value.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
