//! Core library entry for the `readmegen` CLI.
//!
//! A generation cycle parses a repository URL, fetches the repository's
//! metadata, builds a prompt from it, and asks a chat-completion model for a
//! README. The [`generation::Orchestrator`] sequences those steps over the
//! ports bundled in a [`context::ServiceContext`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod generation;
pub mod ports;
pub mod prompt;
pub mod reference;
pub mod render;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if is_informational(err.kind()) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    cli.init_tracing();
    commands::dispatch(&cli.command)
}

/// Help and version requests surface as clap errors but are successful runs.
fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}
