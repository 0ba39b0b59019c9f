//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Top-level CLI parser for `readmegen`.
#[derive(Debug, Parser)]
#[command(
    name = "readmegen",
    version,
    about = "Generate a README.md for a GitHub repository"
)]
pub struct Cli {
    /// Log verbosity; repeat for more detail (-v warn, -vv info, -vvv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a README from repository metadata and a language model.
    Generate(GenerateArgs),
    /// Render an existing Markdown file to HTML on stdout.
    Render {
        /// Markdown file to render.
        file: PathBuf,
        /// Drop the first line (the top-level heading) before rendering.
        #[arg(long)]
        preview: bool,
    },
}

/// Arguments of `readmegen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Repository URL containing `github.com/<owner>/<repo>`.
    pub url: String,
    /// Free-text hints passed to the model.
    #[arg(short, long, default_value = "")]
    pub instructions: String,
    /// Save the README here instead of printing it (a directory gets `README.md`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Also write the rendered README as a standalone HTML page.
    #[arg(long)]
    pub html: Option<PathBuf>,
    /// Render the HTML page without the first line.
    #[arg(long, requires = "html")]
    pub preview: bool,
    /// Copy the README to the system clipboard.
    #[arg(long)]
    pub copy: bool,
    /// Print repository statistics to stderr.
    #[arg(long)]
    pub stats: bool,
    /// Answer both network calls from a recorded cassette instead.
    #[arg(long, value_name = "CASSETTE")]
    pub replay: Option<PathBuf>,
}

impl Cli {
    /// Installs the stderr log subscriber. `RUST_LOG` overrides `-v`.
    ///
    /// Safe to call more than once; later calls are ignored.
    pub fn init_tracing(&self) {
        let level = match self.verbose {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("readmegen={level}")));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
