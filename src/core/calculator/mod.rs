//! Gap analysis: validate, sort a private copy, scan once.

pub mod gaps;
pub mod sort;
pub mod validate;

pub use gaps::{find_missing_ranges, scan_gaps};
pub use sort::merge_sort;
pub use validate::validate_frames;
