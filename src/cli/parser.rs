use crate::core::input::InputFormat;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for framegap
/// CLI application to find missing frames in a captured frame sequence
#[derive(Parser)]
#[command(
    name = "framegap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find missing frames in a list of received video frame numbers",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests or per-project settings)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or validate the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file for missing or unknown fields"
        )]
        check: bool,
    },

    /// Analyze a frame list and report the missing ranges
    Analyze {
        /// Frame list file (JSON array or whitespace/comma separated numbers).
        /// Reads stdin when omitted or "-".
        file: Option<String>,

        /// Input format (default: from config, usually auto-detected)
        #[arg(long, value_enum, value_name = "FORMAT")]
        input: Option<InputFormat>,

        /// Print the result as JSON instead of the table report
        #[arg(long)]
        json: bool,

        /// Do not list every gap in the table report
        #[arg(long = "no-list")]
        no_list: bool,
    },

    /// Analyze a frame list and export the result
    Export {
        /// Frame list file, reads stdin when omitted or "-"
        input_file: Option<String>,

        /// Export format: csv (one row per gap), json (full result)
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Input format (default: from config, usually auto-detected)
        #[arg(long, value_enum, value_name = "FORMAT")]
        input: Option<InputFormat>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_accepts_global_config_after_subcommand() {
        let cli = Cli::parse_from([
            "framegap", "analyze", "f.txt", "--json", "--config", "c.conf",
        ]);
        assert_eq!(cli.config.as_deref(), Some("c.conf"));
        match cli.command {
            Commands::Analyze { file, json, .. } => {
                assert_eq!(file.as_deref(), Some("f.txt"));
                assert!(json);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn export_defaults_to_csv() {
        let cli = Cli::parse_from(["framegap", "export", "--file", "/tmp/out.csv"]);
        match cli.command {
            Commands::Export { format, input_file, .. } => {
                assert_eq!(format, ExportFormat::Csv);
                assert!(input_file.is_none());
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn input_format_is_parsed_by_clap() {
        let cli = Cli::parse_from(["framegap", "analyze", "f.txt", "--input", "text"]);
        match cli.command {
            Commands::Analyze { input, .. } => assert_eq!(input, Some(InputFormat::Text)),
            _ => panic!("expected analyze"),
        }

        let err = Cli::try_parse_from(["framegap", "analyze", "f.txt", "--input", "yaml"]);
        assert!(err.is_err());
    }
}
