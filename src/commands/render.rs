//! `readmegen render` command.

use std::path::Path;

use crate::render::{render_full, render_preview};

/// Execute the `render` command.
///
/// # Errors
///
/// Returns an error string if the file cannot be read.
pub fn run(file: &Path, preview: bool) -> Result<(), String> {
    println!("{}", render_file(file, preview)?);
    Ok(())
}

fn render_file(file: &Path, preview: bool) -> Result<String, String> {
    let markdown = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
    let html = if preview {
        render_preview(&markdown)
    } else {
        render_full(&markdown)
    };
    Ok(html)
}
