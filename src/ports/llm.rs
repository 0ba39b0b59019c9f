//! LLM client port for chat completions.

use serde::{Deserialize, Serialize};

use super::PortFuture;

/// A single-prompt request to a chat-completion model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The model identifier (e.g. `"deepseek/deepseek-r1-0528-qwen3-8b:free"`).
    pub model: String,
    /// Content of the single user-role message.
    pub prompt: String,
}

/// Sends completion requests to a language model.
pub trait LlmClient: Send + Sync {
    /// Returns the first choice's message content, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::CompletionRequest`] on a non-success status,
    /// [`GenerationError::InvalidCompletionResponse`] when the content path is
    /// missing, and [`GenerationError::Transport`] when no response arrives.
    ///
    /// [`GenerationError::CompletionRequest`]: crate::error::GenerationError::CompletionRequest
    /// [`GenerationError::InvalidCompletionResponse`]: crate::error::GenerationError::InvalidCompletionResponse
    /// [`GenerationError::Transport`]: crate::error::GenerationError::Transport
    fn complete(&self, request: &CompletionRequest) -> PortFuture<'_, String>;
}
