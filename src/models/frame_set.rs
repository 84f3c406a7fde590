use crate::core::calculator::find_missing_ranges;
use crate::errors::{AppError, AppResult};
use crate::models::analysis::AnalysisResult;
use serde_json::Value;

/// Observed frame numbers, in the order they were received.
///
/// Values are kept as given: positivity is checked by the analyzer, and
/// uniqueness is the caller's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSet {
    frames: Vec<i64>,
}

impl FrameSet {
    pub fn new(frames: Vec<i64>) -> Self {
        Self { frames }
    }

    /// Build a frame set from a dynamically typed JSON document.
    ///
    /// The document must be an array (`AppError::Shape` otherwise) and every
    /// element must be an integer number (`AppError::Element` otherwise).
    pub fn from_json_value(value: &Value) -> AppResult<Self> {
        Self::from_json_value_capped(value, usize::MAX)
    }

    /// Same as `from_json_value`, failing with `AppError::InputTooLarge` when
    /// the array holds more than `limit` elements.
    pub fn from_json_value_capped(value: &Value, limit: usize) -> AppResult<Self> {
        let items = value.as_array().ok_or_else(|| {
            AppError::Shape(format!("expected a JSON array, found {}", kind_of(value)))
        })?;

        if items.len() > limit {
            return Err(AppError::InputTooLarge {
                count: items.len(),
                limit,
            });
        }

        let mut frames = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item.as_i64() {
                Some(n) => frames.push(n),
                None => return Err(AppError::element(index, item)),
            }
        }

        Ok(Self { frames })
    }

    pub fn from_json_str(content: &str, limit: usize) -> AppResult<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| AppError::Shape(format!("invalid JSON document: {e}")))?;
        Self::from_json_value_capped(&value, limit)
    }

    /// Parse whitespace and/or comma separated frame numbers.
    ///
    /// Everything after a `#` on a line is a comment.
    pub fn from_text(content: &str) -> AppResult<Self> {
        Self::from_text_capped(content, usize::MAX)
    }

    /// Same as `from_text`, stopping with `AppError::InputTooLarge` as soon as
    /// more than `limit` frames have been seen.
    pub fn from_text_capped(content: &str, limit: usize) -> AppResult<Self> {
        let tokens = content
            .lines()
            .map(|line| line.split_once('#').map_or(line, |(data, _)| data))
            .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
            .filter(|tok| !tok.is_empty());

        let mut frames = Vec::new();
        for (index, tok) in tokens.enumerate() {
            if index >= limit {
                return Err(AppError::InputTooLarge {
                    count: index + 1,
                    limit,
                });
            }
            let n = tok
                .parse::<i64>()
                .map_err(|_| AppError::element(index, tok))?;
            frames.push(n);
        }

        Ok(Self { frames })
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Highest observed frame, i.e. the expected final frame of the capture.
    pub fn last_frame(&self) -> Option<i64> {
        self.frames.iter().copied().max()
    }

    pub fn analyze(&self) -> AppResult<AnalysisResult> {
        find_missing_ranges(&self.frames)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
