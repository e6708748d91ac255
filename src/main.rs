// tablescrape: extract HTML tables from a web page or local file as JSON.
//
// Settings come from config.toml (or --config) and command-line flags.
// Logs go to stderr; RUST_LOG controls verbosity.

use clap::Parser;
use std::process::ExitCode;
use tablescrape::{CliArgs, run};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();

    let result = match args.resolve() {
        Ok(config) => run(&config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_config_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
