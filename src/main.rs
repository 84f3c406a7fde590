//! framegap main entrypoint.

use framegap::run;
use framegap::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // diagnostics go to stderr so JSON on stdout stays clean
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("framegap=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
