//! Frame number validation.

use crate::errors::{AppError, AppResult};

/// Check that every frame number is >= 1 and return an owned copy of them.
///
/// Stops at the first invalid element. The caller's slice is only read.
/// Duplicates are not detected.
pub fn validate_frames(frames: &[i64]) -> AppResult<Vec<u64>> {
    let mut out = Vec::with_capacity(frames.len());

    for (index, &frame) in frames.iter().enumerate() {
        if frame <= 0 {
            return Err(AppError::element(index, frame));
        }
        out.push(frame as u64);
    }

    Ok(out)
}
