//! Markdown to HTML conversion for generated READMEs.

use pulldown_cmark::{html, Options, Parser};

/// Renders the whole Markdown document to HTML.
#[must_use]
pub fn render_full(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(markdown, options()));
    out
}

/// Renders everything after the first line.
///
/// The dedicated preview shows its own title, so the generated top-level
/// heading is dropped. Whatever the first line holds is dropped, heading or
/// not; single-line input renders to an empty string.
#[must_use]
pub fn render_preview(markdown: &str) -> String {
    render_full(drop_first_line(markdown))
}

/// The text after the first `\n`, or `""` when there is none.
#[must_use]
pub fn drop_first_line(markdown: &str) -> &str {
    markdown.split_once('\n').map_or("", |(_, rest)| rest)
}

// GitHub-flavored extensions the generated READMEs lean on.
fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}
