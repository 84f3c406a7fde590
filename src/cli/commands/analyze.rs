use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze::{AnalyzeLogic, AnalyzeRequest};
use crate::core::report::OutputFormat;
use crate::errors::AppResult;

/// Handle the `analyze` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        file,
        input,
        json,
        no_list,
    } = cmd
    {
        let req = AnalyzeRequest {
            source: file.clone(),
            input: *input,
            output: json.then_some(OutputFormat::Json),
            no_list: *no_list,
        };
        AnalyzeLogic::run(&req, cfg)?;
    }
    Ok(())
}
