//! Builds the instruction document sent to the completion model.
//!
//! The output is a pure function of the metadata and the user's free text:
//! identical inputs always produce byte-identical prompts.

use std::fmt::Write as _;

use crate::ports::RepositoryMetadata;

/// Substituted when the repository has no description.
pub const NO_DESCRIPTION: &str = "No description provided.";
/// Substituted when no primary language is reported.
pub const NO_LANGUAGE: &str = "Not specified.";
/// Substituted when no license is detected.
pub const NO_LICENSE: &str = "Not specified.";
/// Substituted when the user left the instructions blank.
pub const NO_INSTRUCTIONS: &str = "No custom instructions provided.";
/// Placeholder tagline used inside the header example when there is no description.
pub const HEADER_TAGLINE_FALLBACK: &str = "A brief description of the project.";

/// Sections the generated README must contain, in order, after the header.
pub const REQUIRED_SECTIONS: [&str; 7] = [
    "Features",
    "Tech Stack",
    "Installation",
    "Usage",
    "Contributing",
    "Author",
    "License",
];

/// Presentation styles the model must choose exactly one of.
pub const PRESENTATION_STYLES: [(&str, &str); 3] = [
    (
        "Frosted Glass / Gradient Cards",
        "Use Markdown tables or code blocks to simulate cards with a clean, UI-like look. Use gradients for headers.",
    ),
    (
        "Table-Based Dashboard",
        "Structure the main sections into a professional, dashboard-like table layout.",
    ),
    (
        "Shadowed Cards with Gradient Titles",
        "Use headings and blockquotes to create distinct cards for each section, with prominent gradient titles.",
    ),
];

/// Immutable input to prompt construction.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// Metadata of the repository being documented.
    pub metadata: &'a RepositoryMetadata,
    /// Free-text hints from the user; may be blank.
    pub user_instructions: &'a str,
}

/// Markdown for the author badge linking to `profile_url`.
#[must_use]
pub fn author_badge(profile_url: &str) -> String {
    format!(
        "[![GitHub Profile](https://img.shields.io/badge/GitHub-Profile-blue?style=for-the-badge&logo=github)]({profile_url})"
    )
}

/// Renders the prompt for `request`. Never fails; missing fields get fallback text.
#[must_use]
pub fn build_prompt(request: GenerationRequest<'_>) -> String {
    let metadata = request.metadata;
    let name = metadata.name.as_str();
    let profile_url = metadata.owner.html_url.as_str();
    let instructions = if request.user_instructions.trim().is_empty() {
        NO_INSTRUCTIONS
    } else {
        request.user_instructions
    };
    let description = metadata.description().unwrap_or(NO_DESCRIPTION);
    let language = metadata.language().unwrap_or(NO_LANGUAGE);
    let license = metadata.license_name().unwrap_or(NO_LICENSE);
    let tagline = metadata.description().unwrap_or(HEADER_TAGLINE_FALLBACK);

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Generate a professional, visually appealing README.md for the GitHub repository \"{name}\".\n"
    );

    let _ = writeln!(prompt, "Repository Info:");
    let _ = writeln!(prompt, "- Author: {}", metadata.owner.login);
    let _ = writeln!(prompt, "- Author Profile: {profile_url}");
    let _ = writeln!(prompt, "- Description: {description}");
    let _ = writeln!(prompt, "- Primary Language: {language}");
    let _ = writeln!(prompt, "- License: {license}\n");

    let _ = writeln!(prompt, "User's Custom Instructions:");
    let _ = writeln!(prompt, "- {instructions}\n");

    let _ = writeln!(prompt, "**README Structure and Formatting Rules:**\n");

    let _ = writeln!(
        prompt,
        "1. **Header:** Start with a visually appealing header using a Markdown table, like this example:"
    );
    let _ = writeln!(prompt, "```markdown");
    let _ = writeln!(prompt, "<p align=\"center\">");
    let _ = writeln!(prompt, "  <table>");
    let _ = writeln!(prompt, "    <tr>");
    let _ = writeln!(
        prompt,
        "      <td align=\"center\"><h1><strong>{name}</strong></h1></td>"
    );
    let _ = writeln!(prompt, "    </tr>");
    let _ = writeln!(prompt, "  </table>");
    let _ = writeln!(prompt, "</p>");
    let _ = writeln!(prompt, "<p align=\"center\">");
    let _ = writeln!(prompt, "  {tagline}");
    let _ = writeln!(prompt, "</p>");
    let _ = writeln!(prompt, "```");
    let _ = writeln!(
        prompt,
        "Do NOT use a bash terminal block for the main title.\n"
    );

    let _ = writeln!(
        prompt,
        "2. **Sections:** Structure the README with these sections: {}. Use horizontal rules (`---`) to separate them.\n",
        join_sections()
    );

    let _ = writeln!(
        prompt,
        "3. **Bash for Commands:** Use bash code blocks (```bash) **only** for terminal commands within the 'Installation' or 'Usage' sections.\n"
    );

    let _ = writeln!(
        prompt,
        "4. **Author Section:** Include an 'Author' section. Create a visually appealing button linking to the author's profile using this exact markdown:"
    );
    let _ = writeln!(prompt, "```markdown");
    let _ = writeln!(prompt, "{}", author_badge(profile_url));
    let _ = writeln!(prompt, "```\n");

    let _ = writeln!(
        prompt,
        "5. **Visual Style:** Present the content using ONE of the following modern design styles:"
    );
    for (style, description) in PRESENTATION_STYLES {
        let _ = writeln!(prompt, "* **{style}:** {description}");
    }
    prompt.push('\n');

    let _ = write!(
        prompt,
        "The output must be only valid Markdown, ready to be copied. \
         Do not include any explanatory text before or after the Markdown content."
    );

    prompt
}

/// "A, B, ..., and Z" over [`REQUIRED_SECTIONS`].
fn join_sections() -> String {
    let split = REQUIRED_SECTIONS.len() - 1;
    let head = REQUIRED_SECTIONS[..split].join(", ");
    format!("{head}, and {}", REQUIRED_SECTIONS[split])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{License, Owner};

    fn hello_world() -> RepositoryMetadata {
        RepositoryMetadata {
            name: "Hello-World".into(),
            owner: Owner {
                login: "octocat".into(),
                html_url: "https://github.com/octocat".into(),
            },
            description: Some("My first repository".into()),
            language: Some("C".into()),
            license: Some(License {
                name: Some("MIT License".into()),
                spdx_id: Some("MIT".into()),
            }),
            stargazers_count: 80,
            forks_count: 9,
        }
    }

    fn prompt_for(metadata: &RepositoryMetadata, instructions: &str) -> String {
        build_prompt(GenerationRequest {
            metadata,
            user_instructions: instructions,
        })
    }

    #[test]
    fn identical_inputs_give_identical_prompts() {
        let metadata = hello_world();
        let first = prompt_for(&metadata, "keep it short");
        let second = prompt_for(&metadata, "keep it short");
        assert_eq!(first, second);
    }

    #[test]
    fn embeds_present_fields_verbatim() {
        let prompt = prompt_for(&hello_world(), "mention the CLI");
        assert!(prompt.contains("\"Hello-World\""));
        assert!(prompt.contains("- Author: octocat"));
        assert!(prompt.contains("- Author Profile: https://github.com/octocat"));
        assert!(prompt.contains("- Description: My first repository"));
        assert!(prompt.contains("- Primary Language: C"));
        assert!(prompt.contains("- License: MIT License"));
        assert!(prompt.contains("- mention the CLI"));

        assert!(!prompt.contains(NO_DESCRIPTION));
        assert!(!prompt.contains(NO_LANGUAGE));
        assert!(!prompt.contains(NO_INSTRUCTIONS));
        assert!(!prompt.contains(HEADER_TAGLINE_FALLBACK));
    }

    #[test]
    fn substitutes_fallbacks_for_missing_fields() {
        let metadata = RepositoryMetadata {
            description: None,
            language: Some(String::new()),
            license: None,
            ..hello_world()
        };
        let prompt = prompt_for(&metadata, "   \n");
        assert!(prompt.contains(&format!("- Description: {NO_DESCRIPTION}")));
        assert!(prompt.contains(&format!("- Primary Language: {NO_LANGUAGE}")));
        assert!(prompt.contains(&format!("- License: {NO_LICENSE}")));
        assert!(prompt.contains(&format!("- {NO_INSTRUCTIONS}")));
        assert!(prompt.contains(HEADER_TAGLINE_FALLBACK));
    }

    #[test]
    fn lists_required_sections_in_order() {
        let prompt = prompt_for(&hello_world(), "");
        assert!(prompt.contains(
            "Features, Tech Stack, Installation, Usage, Contributing, Author, and License"
        ));
    }

    #[test]
    fn carries_author_badge_for_owner_profile() {
        let prompt = prompt_for(&hello_world(), "");
        assert!(prompt.contains(
            "[![GitHub Profile](https://img.shields.io/badge/GitHub-Profile-blue?style=for-the-badge&logo=github)](https://github.com/octocat)"
        ));
    }

    #[test]
    fn carries_formatting_rules() {
        let prompt = prompt_for(&hello_world(), "");
        assert!(prompt.contains("<td align=\"center\"><h1><strong>Hello-World</strong></h1></td>"));
        assert!(prompt.contains("Do NOT use a bash terminal block for the main title."));
        assert!(prompt.contains("'Installation' or 'Usage'"));
        for (style, _) in PRESENTATION_STYLES {
            assert!(prompt.contains(style), "missing style {style}");
        }
        assert!(prompt.contains("ONE of the following"));
    }
}
