//! # docfetch
//!
//! Thin entrypoint: logging setup, argument parsing and exit codes. All
//! pipeline logic lives in the `docfetch` library crate.

use anyhow::Result;
use docfetch::FetchConfig;
use docfetch_cli::{parse_args, run, usage_line, ParsedArgs};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

// --- Main Application Entry ---

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // 1. Load `.env` and set up logging on stderr; stdout carries the payload only.
    dotenvy::dotenv().ok();
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive("docfetch=warn".parse()?))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 2. Parse CLI arguments before any I/O.
    let cli = match parse_args(std::env::args_os()) {
        ParsedArgs::Run(cli) => cli,
        ParsedArgs::Informational(e) => e.exit(),
        ParsedArgs::Usage => {
            eprintln!("{}", usage_line());
            return Ok(ExitCode::FAILURE);
        }
    };

    // 3. Run the pipeline and map the result to an exit code.
    let config = FetchConfig::from_env();
    if let Err(e) = run(cli, &config).await {
        debug!(kind = %e.kind(), "docfetch failed");
        eprintln!("docfetch: {e}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
