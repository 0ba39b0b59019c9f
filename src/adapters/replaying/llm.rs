//! Replaying adapter for the `LlmClient` port.

use std::sync::{Arc, Mutex};

use super::next_result;
use crate::cassette::format::{COMPLETE, LLM_PORT};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{CompletionRequest, LlmClient, PortFuture};

/// Serves recorded LLM completions from a cassette.
pub struct ReplayingLlmClient {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingLlmClient {
    /// Create a replaying LLM client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl LlmClient for ReplayingLlmClient {
    fn complete(&self, _request: &CompletionRequest) -> PortFuture<'_, String> {
        let result = next_result(&self.replayer, LLM_PORT, COMPLETE);
        Box::pin(async move { result })
    }
}
