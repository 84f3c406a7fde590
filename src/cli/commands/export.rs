use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze::{AnalyzeLogic, AnalyzeRequest};
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input_file,
        format,
        file,
        input,
        force,
    } = cmd
    {
        let req = AnalyzeRequest {
            source: input_file.clone(),
            input: *input,
            ..AnalyzeRequest::default()
        };
        let (_, result) = AnalyzeLogic::load_and_analyze(&req, cfg)?;
        ExportLogic::export(&result, *format, file, *force)?;
    }
    Ok(())
}
