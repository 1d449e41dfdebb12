//! modelpack CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use modelpack::commands::{dispatch, Cli};

fn main() {
    // Initialize tracing. Diagnostics go to stderr: stdout may carry the
    // archive byte stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
