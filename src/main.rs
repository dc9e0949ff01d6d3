mod cli;
mod report;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use photo_to_svg::{PhotoSvgResult, Vectorizer};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::report::report_error;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", cli::usage());
            return ExitCode::from(1);
        }
        // bad threshold, unknown flags, --help and --version
        Err(err) => err.exit(),
    };

    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::from(1)
        }
    }
}

/// Convert the input image and announce where the SVG went.
fn run(cli: &Cli) -> PhotoSvgResult<()> {
    let summary = Vectorizer::from_options(cli.into()).convert(&cli.input, &cli.output)?;
    println!("SVG saved to {}", summary.output.display());
    Ok(())
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (warnings by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
