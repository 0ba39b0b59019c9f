//! The single state record of a generation cycle.

use crate::ports::RepositoryMetadata;

/// Where the orchestrator currently is. Exactly one variant holds at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    /// Nothing has been requested yet, or the last cycle was abandoned.
    #[default]
    Idle,
    /// A cycle is in flight.
    Loading,
    /// The completion endpoint returned a README.
    Success {
        /// Generated Markdown, trimmed.
        result: String,
        /// Metadata the prompt was built from.
        metadata: RepositoryMetadata,
    },
    /// The cycle stopped at some step.
    Failed {
        /// Human-readable message, never empty.
        reason: String,
    },
}

impl GenerationState {
    /// Whether a cycle is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The generated Markdown, when the last cycle succeeded.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        if let Self::Success { result, .. } = self {
            Some(result)
        } else {
            None
        }
    }

    /// The failure message, when the last cycle failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        if let Self::Failed { reason } = self {
            Some(reason)
        } else {
            None
        }
    }
}
