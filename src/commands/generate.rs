//! `readmegen generate` command.

use std::env;
use std::path::PathBuf;

use tokio::runtime::Builder;
use tracing::info;

use crate::cli::GenerateArgs;
use crate::config::{Settings, RECORD_VAR};
use crate::context::ServiceContext;
use crate::export::{copy_to_clipboard, format_stats, html_page, save_markdown, COPIED};
use crate::generation::{GenerationState, Orchestrator};
use crate::ports::RepositoryMetadata;
use crate::render::{render_full, render_preview};

/// Execute the `generate` command.
///
/// Settings are loaded before anything else, so a missing credential fails
/// at startup. With `--replay` no settings are needed.
///
/// # Errors
///
/// Returns an error string for configuration problems, a failed generation
/// cycle, or a failed output action.
pub fn run(args: &GenerateArgs) -> Result<(), String> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    if let Some(cassette) = &args.replay {
        let ctx = ServiceContext::replaying(cassette)?;
        return runtime.block_on(execute(&ctx, Settings::default_model(), args));
    }

    let settings = Settings::from_env().map_err(|e| e.to_string())?;

    if let Ok(path) = env::var(RECORD_VAR) {
        let (ctx, session) = ServiceContext::recording(&settings, PathBuf::from(path))?;
        let result = runtime.block_on(execute(&ctx, &settings.model, args));
        // Adapters hold recorder handles; release them before writing.
        drop(ctx);
        let written = session.finish()?;
        eprintln!("Recording saved to: {}", written.display());
        return result;
    }

    let ctx = ServiceContext::live(&settings)?;
    runtime.block_on(execute(&ctx, &settings.model, args))
}

/// Runs one generation cycle on `ctx` and performs the requested output actions.
///
/// # Errors
///
/// Returns the failure message of the cycle, or of the first failing output action.
pub async fn execute(
    ctx: &ServiceContext,
    model: &str,
    args: &GenerateArgs,
) -> Result<(), String> {
    let orchestrator = Orchestrator::new(ctx, model);
    let state = orchestrator
        .generate(&args.url, &args.instructions)
        .await
        .map_err(|e| e.to_string())?;

    // Metadata is published before the completion runs, so stats survive its failure.
    if args.stats {
        if let Some(metadata) = orchestrator.metadata() {
            eprintln!(
                "{}/{}: {}",
                metadata.owner.login,
                metadata.name,
                format_stats(&metadata)
            );
        }
    }

    match state {
        GenerationState::Success { result, metadata } => deliver(args, &result, &metadata),
        GenerationState::Failed { reason } => Err(reason),
        GenerationState::Idle | GenerationState::Loading => {
            Err("README generation did not complete".to_string())
        }
    }
}

fn deliver(
    args: &GenerateArgs,
    markdown: &str,
    metadata: &RepositoryMetadata,
) -> Result<(), String> {
    match &args.output {
        Some(target) => {
            let path = save_markdown(target, markdown)?;
            info!(path = %path.display(), "README saved");
            eprintln!("Saved {}", path.display());
        }
        None => println!("{markdown}"),
    }

    if let Some(html_path) = &args.html {
        let body = if args.preview {
            render_preview(markdown)
        } else {
            render_full(markdown)
        };
        std::fs::write(html_path, html_page(&metadata.name, &body))
            .map_err(|e| format!("Failed to write {}: {e}", html_path.display()))?;
        eprintln!("Rendered {}", html_path.display());
    }

    if args.copy {
        copy_to_clipboard(markdown)?;
        eprintln!("{COPIED}");
    }

    Ok(())
}
