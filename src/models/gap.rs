use serde::{Serialize, Serializer};
use std::fmt;

/// Closed interval `[start, end]` of missing frame numbers.
///
/// Both bounds are >= 1 and `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GapRange {
    pub start: u64,
    pub end: u64,
}

impl GapRange {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start >= 1 && start <= end, "invalid gap [{start}, {end}]");
        Self { start, end }
    }

    /// Number of missing frames covered by the range.
    pub fn size(&self) -> u64 {
        self.end - self.start + 1
    }
}

impl fmt::Display for GapRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

// Serialized as a two-element array, e.g. `[2, 4]`.
impl Serialize for GapRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq([self.start, self.end])
    }
}
