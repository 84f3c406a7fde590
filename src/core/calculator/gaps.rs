//! Module responsible for finding the missing frame ranges in a capture
//! and picking the longest one.
//!
//! Frames are numbered from 1. The highest received frame is taken as the
//! last frame of the capture, so nothing after it is ever reported missing.

use crate::core::calculator::sort::merge_sort;
use crate::core::calculator::validate::validate_frames;
use crate::errors::AppResult;
use crate::models::{AnalysisResult, GapRange};

/// Analyze the received frame numbers and report the missing ranges.
///
/// Fails with `AppError::Element` on the first frame that is not >= 1.
/// An empty input yields `AnalysisResult::default()`. `frames` must not
/// contain duplicates; it is never modified.
pub fn find_missing_ranges(frames: &[i64]) -> AppResult<AnalysisResult> {
    let owned = validate_frames(frames)?;
    if owned.is_empty() {
        return Ok(AnalysisResult::default());
    }

    let sorted = merge_sort(&owned);
    let result = scan_gaps(&sorted);

    tracing::debug!(
        frames = sorted.len(),
        gaps = result.gap_count(),
        missing = result.missing_frames,
        longest = result.longest_gap_size,
        "gap analysis complete"
    );

    Ok(result)
}

/// Single left-to-right pass over sorted, unique, non-empty frame numbers.
///
/// Tie-break: the longest gap is only replaced by a strictly larger one, so
/// among equally long gaps the first (lowest start) is kept.
pub fn scan_gaps(sorted: &[u64]) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    let Some(&first) = sorted.first() else {
        return result;
    };

    // leading gap: frames 1..first were never received
    if first > 1 {
        record_gap(&mut result, GapRange::new(1, first - 1));
    }

    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if b - a > 1 {
            record_gap(&mut result, GapRange::new(a + 1, b - 1));
        }
    }

    result
}

fn record_gap(result: &mut AnalysisResult, gap: GapRange) {
    let size = gap.size();

    result.missing_frames += size;
    result.missing_gaps.push(gap);

    if size > result.longest_gap_size {
        result.longest_gap_size = size;
        result.longest_gap_range = Some(gap);
    }
}
