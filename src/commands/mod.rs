//! Command dispatch and handlers.

pub mod generate;
pub mod render;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// When `READMEGEN_RECORD` is set to a file path, `generate` records both
/// network calls into a cassette at that path.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Render { file, preview } => render::run(file, *preview),
    }
}
