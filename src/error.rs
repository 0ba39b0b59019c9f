//! Error types for the generation pipeline and startup configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures that end a generation cycle.
///
/// Every variant renders to the single human-readable message stored in
/// [`GenerationState::Failed`](crate::generation::GenerationState::Failed).
/// The type is serializable so cassettes can record failures exactly.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationError {
    /// The input did not contain a `github.com/<owner>/<repo>` reference.
    #[error("Please enter a valid GitHub repo URL.")]
    InvalidReference,

    /// The metadata endpoint answered with a non-success status.
    ///
    /// Missing repositories and rate limiting are reported the same way;
    /// the status is kept for logging only.
    #[error("Repo not found or rate-limited.")]
    RepositoryNotFoundOrRateLimited {
        /// HTTP status returned by the metadata endpoint.
        status: u16,
    },

    /// The metadata endpoint succeeded but its body could not be decoded.
    #[error("Repo metadata could not be read: {0}")]
    InvalidMetadataResponse(String),

    /// The completion endpoint answered with a non-success status.
    #[error("Failed to generate README: AI Error: {status}")]
    CompletionRequest {
        /// HTTP status returned by the completion endpoint.
        status: u16,
    },

    /// The completion endpoint succeeded but carried no message content.
    #[error("Failed to generate README: Invalid AI response")]
    InvalidCompletionResponse,

    /// The request never produced a response (connection failure, timeout).
    #[error("{service} request failed: {reason}")]
    Transport {
        /// Which endpoint was being called.
        service: String,
        /// Transport-level description of the failure.
        reason: String,
    },
}

impl GenerationError {
    /// Builds a [`GenerationError::Transport`] from a reqwest error.
    pub(crate) fn transport(service: &str, err: &reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "timed out".to_string()
        } else {
            err.to_string()
        };
        Self::Transport {
            service: service.to_string(),
            reason,
        }
    }
}

/// Startup-time configuration failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No completion-service credential was supplied.
    #[error("{0} is not set; export it or add it to .env")]
    MissingApiKey(&'static str),

    /// A variable was present but could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_user_facing_wording() {
        assert_eq!(
            GenerationError::InvalidReference.to_string(),
            "Please enter a valid GitHub repo URL."
        );
        assert_eq!(
            GenerationError::RepositoryNotFoundOrRateLimited { status: 403 }.to_string(),
            "Repo not found or rate-limited."
        );
        assert_eq!(
            GenerationError::CompletionRequest { status: 502 }.to_string(),
            "Failed to generate README: AI Error: 502"
        );
        assert_eq!(
            GenerationError::InvalidCompletionResponse.to_string(),
            "Failed to generate README: Invalid AI response"
        );
    }

    #[test]
    fn not_found_and_rate_limited_share_a_message() {
        let not_found = GenerationError::RepositoryNotFoundOrRateLimited { status: 404 };
        let limited = GenerationError::RepositoryNotFoundOrRateLimited { status: 429 };
        assert_eq!(not_found.to_string(), limited.to_string());
    }

    #[test]
    fn errors_survive_json() {
        let err = GenerationError::Transport {
            service: "GitHub".into(),
            reason: "timed out".into(),
        };
        let value = serde_json::to_value(&err).unwrap();
        let back: GenerationError = serde_json::from_value(value).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ConfigError::MissingApiKey("OPENROUTER_API_KEY");
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }
}
