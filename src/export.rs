//! Output actions for a generated README: save, copy, HTML page, repository stats.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::ports::RepositoryMetadata;

/// File name used when saving into a directory.
pub const README_FILE_NAME: &str = "README.md";
/// Acknowledgment printed after a successful clipboard copy.
pub const COPIED: &str = "Copied!";

/// Saves `markdown` to `target`, or to `target/README.md` when `target` is a directory.
///
/// # Errors
///
/// Returns an error string when there is nothing to save or the write fails.
pub fn save_markdown(target: &Path, markdown: &str) -> Result<PathBuf, String> {
    if markdown.is_empty() {
        return Err("No generated README to save".to_string());
    }
    let path = if target.is_dir() {
        target.join(README_FILE_NAME)
    } else {
        target.to_path_buf()
    };
    std::fs::write(&path, markdown)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    Ok(path)
}

/// Places `markdown` on the system clipboard.
///
/// # Errors
///
/// Returns an error string when there is nothing to copy or no clipboard is available.
pub fn copy_to_clipboard(markdown: &str) -> Result<(), String> {
    if markdown.is_empty() {
        return Err("No generated README to copy".to_string());
    }
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
    clipboard
        .set_text(markdown.to_string())
        .map_err(|e| format!("Failed to copy to clipboard: {e}"))
}

/// Wraps rendered HTML in a standalone page titled `title`.
#[must_use]
pub fn html_page(title: &str, body_html: &str) -> String {
    let mut escaped = String::with_capacity(title.len());
    let _ = pulldown_cmark_escape::escape_html(&mut escaped, title);
    let mut page = String::with_capacity(body_html.len() + 512);
    let _ = writeln!(page, "<!DOCTYPE html>");
    let _ = writeln!(page, "<html lang=\"en\">");
    let _ = writeln!(page, "<head>");
    let _ = writeln!(page, "<meta charset=\"utf-8\">");
    let _ = writeln!(page, "<title>{escaped}</title>");
    let _ = writeln!(page, "<style>{STYLESHEET}</style>");
    let _ = writeln!(page, "</head>");
    let _ = writeln!(page, "<body>");
    let _ = writeln!(page, "<div class=\"markdown-preview\">");
    page.push_str(body_html);
    let _ = writeln!(page, "</div>");
    let _ = writeln!(page, "</body>");
    let _ = write!(page, "</html>");
    page
}

const STYLESHEET: &str = "\
body{margin:0;padding:2rem;background:#0d0c22;color:#e0e0e0;font-family:Inter,sans-serif}\
.markdown-preview{max-width:56rem;margin:0 auto}\
.markdown-preview a{color:#a78bfa}\
.markdown-preview pre{background:#1e1e3f;padding:1em;border-radius:8px;overflow-x:auto}\
.markdown-preview table{width:100%;border-collapse:collapse}\
.markdown-preview th,.markdown-preview td{border:1px solid #4a4a6a;padding:.5em 1em}";

/// Repository statistics as shown next to a generated README.
#[must_use]
pub fn format_stats(metadata: &RepositoryMetadata) -> String {
    format!(
        "{} Stars | {} Forks | {} | {}",
        group_thousands(metadata.stargazers_count),
        group_thousands(metadata.forks_count),
        metadata.language().unwrap_or("N/A"),
        metadata.license_spdx().unwrap_or("None"),
    )
}

/// `1_234_567` → `"1,234,567"`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
    let mut rest = digits.as_str();
    while rest.len() > 3 {
        let (head, tail) = rest.split_at(rest.len() - 3);
        groups.push(tail);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();
    groups.join(",")
}
