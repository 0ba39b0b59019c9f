//! Extraction of an owner/name pair from a user-supplied repository URL.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Identifies a GitHub repository by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryReference {
    /// Account or organization that owns the repository.
    pub owner: String,
    /// Repository name with any trailing `.git` removed.
    pub name: String,
}

impl RepositoryReference {
    /// Locates `github.com/<owner>/<repo>` anywhere in `input`.
    ///
    /// `<owner>` and `<repo>` are runs of one or more non-`/` characters;
    /// no case folding or identifier validation is applied. Trailing path
    /// segments after the repository are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidReference`] when no such substring
    /// exists or when the name is empty after stripping `.git`.
    pub fn parse(input: &str) -> Result<Self, GenerationError> {
        let captures = pattern()
            .captures(input)
            .ok_or(GenerationError::InvalidReference)?;
        let owner = &captures[1];
        let raw_name = &captures[2];
        let name = raw_name.strip_suffix(".git").unwrap_or(raw_name);

        if owner.is_empty() || name.is_empty() {
            return Err(GenerationError::InvalidReference);
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("static pattern"))
}
