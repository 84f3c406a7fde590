//! Human-readable and JSON rendering of an analysis.

use crate::errors::{AppError, AppResult};
use crate::models::{AnalysisResult, FrameSet};
use crate::utils::colors::{color_for_coverage, color_for_missing, paint};
use crate::utils::formatting::separator;
use crate::utils::table::{Column, Table};
use crate::utils::{frames_label, group_thousands, percent};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const SEPARATOR_WIDTH: usize = 44;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Options for the table report, usually taken from the config file.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub show_gap_list: bool,
    pub max_listed_gaps: usize,
    pub separator_char: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_gap_list: true,
            max_listed_gaps: 50,
            separator_char: "-".to_string(),
        }
    }
}

pub fn render_json(result: &AnalysisResult) -> AppResult<String> {
    serde_json::to_string_pretty(result)
        .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))
}

/// Summary block followed by the gap table.
pub fn render_table(frames: &FrameSet, result: &AnalysisResult, opts: &ReportOptions) -> String {
    let received = frames.len() as u64;
    let expected = frames.last_frame().map(|f| f.max(0) as u64).unwrap_or(0);
    let coverage = percent(received, expected);
    let sep = separator(&opts.separator_char, SEPARATOR_WIDTH);

    let longest = match &result.longest_gap_range {
        Some(gap) => format!("{gap} ({})", frames_label(result.longest_gap_size)),
        None => "none".to_string(),
    };
    let missing = paint(
        &group_thousands(result.missing_frames),
        color_for_missing(result.missing_frames),
    );
    let coverage = paint(&format!("{coverage:.2}%"), color_for_coverage(coverage));

    let lines = [
        sep.clone(),
        format!("Received frames : {}", group_thousands(received)),
        format!("Expected frames : {}", group_thousands(expected)),
        format!("Missing frames  : {missing}"),
        format!("Coverage        : {coverage}"),
        format!("Gaps            : {}", result.gap_count()),
        format!("Longest gap     : {longest}"),
        sep,
    ];

    let mut out = lines.join("\n");
    out.push('\n');

    if opts.show_gap_list && result.has_gaps() {
        out.push_str(&gap_table(result, opts.max_listed_gaps));
    }

    out
}

fn gap_table(result: &AnalysisResult, limit: usize) -> String {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::right("start"),
        Column::right("end"),
        Column::right("size"),
        Column::left(""),
    ]);

    for (i, gap) in result.missing_gaps.iter().take(limit).enumerate() {
        let mark = if result.is_longest(gap) { "<- longest" } else { "" };
        table.add_row(vec![
            (i + 1).to_string(),
            gap.start.to_string(),
            gap.end.to_string(),
            gap.size().to_string(),
            mark.to_string(),
        ]);
    }

    let mut out = table.render();
    let hidden = result.gap_count().saturating_sub(limit);
    if hidden > 0 {
        out.push_str(&format!("... and {hidden} more\n"));
    }
    out
}
