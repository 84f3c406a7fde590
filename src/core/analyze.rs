use crate::config::Config;
use crate::core::input::{InputFormat, read_frame_set};
use crate::core::report::{OutputFormat, ReportOptions, render_json, render_table};
use crate::errors::AppResult;
use crate::models::{AnalysisResult, FrameSet};
use crate::ui::messages::header;

/// Where the frames come from and how the result is shown.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeRequest {
    /// File path, `-` or `None` for stdin
    pub source: Option<String>,
    /// Overrides `default_input` from the config when set
    pub input: Option<InputFormat>,
    /// Overrides `default_output` from the config when set
    pub output: Option<OutputFormat>,
    /// Suppress the per-gap table
    pub no_list: bool,
}

pub struct AnalyzeLogic;

impl AnalyzeLogic {
    /// Load the frame list described by `req` and analyze it.
    pub fn load_and_analyze(
        req: &AnalyzeRequest,
        cfg: &Config,
    ) -> AppResult<(FrameSet, AnalysisResult)> {
        let format = req.input.unwrap_or(cfg.default_input);
        let frames = read_frame_set(req.source.as_deref(), format, cfg.max_frames)?;
        let result = frames.analyze()?;
        Ok((frames, result))
    }

    /// Analyze and print the report to stdout.
    pub fn run(req: &AnalyzeRequest, cfg: &Config) -> AppResult<AnalysisResult> {
        let (frames, result) = Self::load_and_analyze(req, cfg)?;

        match req.output.unwrap_or(cfg.default_output) {
            OutputFormat::Json => println!("{}", render_json(&result)?),
            OutputFormat::Table => {
                let opts = ReportOptions {
                    show_gap_list: cfg.show_gap_list && !req.no_list,
                    max_listed_gaps: cfg.max_listed_gaps,
                    separator_char: cfg.separator_char.clone(),
                };
                header(format!(
                    "Frame gap report: {}",
                    req.source.as_deref().unwrap_or("<stdin>")
                ));
                print!("{}", render_table(&frames, &result, &opts));
            }
        }

        Ok(result)
    }
}
