use crate::models::gap::GapRange;
use serde::Serialize;

/// Outcome of a gap analysis.
///
/// All four fields are always present. `Default` is the canonical empty
/// result (no gaps, nothing missing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Total number of missing frames (sum of the sizes of `missing_gaps`).
    pub missing_frames: u64,
    /// Missing ranges in strictly increasing start order, never overlapping
    /// nor touching each other.
    pub missing_gaps: Vec<GapRange>,
    /// Largest missing range. When several ranges share the maximum size the
    /// one with the lowest start wins.
    pub longest_gap_range: Option<GapRange>,
    /// Size of `longest_gap_range`, 0 when there is none.
    pub longest_gap_size: u64,
}

impl AnalysisResult {
    pub fn has_gaps(&self) -> bool {
        !self.missing_gaps.is_empty()
    }

    pub fn gap_count(&self) -> usize {
        self.missing_gaps.len()
    }

    /// True if `gap` is the range reported as the longest one.
    pub fn is_longest(&self, gap: &GapRange) -> bool {
        self.longest_gap_range.as_ref() == Some(gap)
    }
}
