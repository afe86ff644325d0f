use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use linesieve::cli::{Cli, output};
use linesieve::error::SieveError;

/// Conventional "command line usage error" exit status.
const EX_USAGE: u8 = 64;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EX_USAGE),
            };
        }
    };

    match cli.run() {
        Ok(report) => {
            // Report text already carries its trailing newline (or is empty).
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) if err.downcast_ref::<SieveError>().is_some() => {
            output::error(&err.to_string());
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::from(EX_USAGE)
        }
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
