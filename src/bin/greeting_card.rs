use std::io;
use std::process::ExitCode;

use photo_to_svg::greeting::run_session;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}
