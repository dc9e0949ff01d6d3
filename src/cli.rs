use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use photo_to_svg::{DEFAULT_THRESHOLD, VectorizeOptions};

/// Command line interface definition.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input image path
    pub input: PathBuf,
    /// Output SVG path (overwritten if it exists)
    pub output: PathBuf,
    /// Pixels brighter than this become foreground (0-255)
    #[arg(default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: i32,
}

impl From<&Cli> for VectorizeOptions {
    fn from(cli: &Cli) -> Self {
        VectorizeOptions::with_threshold(cli.threshold)
    }
}

/// One-line usage text, e.g. `Usage: photo-to-svg <INPUT> <OUTPUT> [THRESHOLD]`.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
