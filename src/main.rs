//! Binary entrypoint for the `readmegen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Recording is handled in commands::generate via READMEGEN_RECORD=<file>.
    match readmegen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
