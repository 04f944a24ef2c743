//! # `docfetch` CLI Library
//!
//! Argument parsing and the top-level run function for the `docfetch` binary.
//! The binary itself only wires up logging and maps results to exit codes.

use clap::{CommandFactory, Parser};
use docfetch::{fetch_and_decode, DocFetchError, FetchConfig};
use std::io;
use tracing::{debug, info};

// --- CLI Argument Struct ---

/// Fetch a JavaScript bundle and print the documentation embedded in it.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "docfetch", author, version, about, long_about = None)]
pub struct Cli {
    /// URL of the JavaScript resource that embeds `JSON.parse('...')`.
    pub url: String,
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum ParsedArgs {
    Run(Cli),
    /// `--help` or `--version`; clap already knows how to print these.
    Informational(clap::Error),
    /// Wrong argument count or unknown flag.
    Usage,
}

/// Parses the argument list, separating usage errors from help requests.
pub fn parse_args<I, T>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => ParsedArgs::Run(cli),
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            ParsedArgs::Informational(e)
        }
        Err(e) => {
            debug!("Argument parsing failed: {e}");
            ParsedArgs::Usage
        }
    }
}

/// The one-line usage message printed on argument errors.
pub fn usage_line() -> String {
    Cli::command().render_usage().to_string()
}

// --- Public Entrypoint ---

/// Runs the pipeline for `cli.url`, writing the decoded text to stdout.
pub async fn run(cli: Cli, config: &FetchConfig) -> Result<(), DocFetchError> {
    info!("Starting docfetch for: {}", cli.url);
    let mut stdout = io::stdout();
    fetch_and_decode(&cli.url, config, &mut stdout).await
}
