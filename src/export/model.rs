// src/export/model.rs

use crate::models::AnalysisResult;
use serde::Serialize;

/// Flat row used for the CSV export, one per missing range.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GapExport {
    pub start: u64,
    pub end: u64,
    pub size: u64,
    pub longest: bool,
}

pub(crate) fn gaps_to_rows(result: &AnalysisResult) -> Vec<GapExport> {
    result
        .missing_gaps
        .iter()
        .map(|gap| GapExport {
            start: gap.start,
            end: gap.end,
            size: gap.size(),
            longest: result.is_longest(gap),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::find_missing_ranges;

    #[test]
    fn only_first_longest_gap_is_flagged() {
        let result = find_missing_ranges(&[1, 5, 6, 10]).unwrap();
        let rows = gaps_to_rows(&result);
        assert_eq!(
            rows,
            vec![
                GapExport { start: 2, end: 4, size: 3, longest: true },
                GapExport { start: 7, end: 9, size: 3, longest: false },
            ]
        );
    }
}
