//! Replaying adapters that serve recorded interactions.

pub mod github;
pub mod llm;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::format::decode_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::GenerationError;

pub use github::ReplayingRepositoryHost;
pub use llm::ReplayingLlmClient;

/// Take the next recorded result for `port`/`method` and decode it.
///
/// An exhausted cassette is reported as a `cassette` transport failure.
pub(crate) fn next_result<T: DeserializeOwned>(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<T, GenerationError> {
    let interaction = replayer
        .lock()
        .map_err(|_| cassette_failure("replayer lock poisoned".into()))?
        .next_interaction(port, method)
        .ok_or_else(|| {
            cassette_failure(format!("no recorded interaction left for {port}::{method}"))
        })?;
    decode_result(interaction.output)
}

fn cassette_failure(reason: String) -> GenerationError {
    GenerationError::Transport {
        service: "cassette".into(),
        reason,
    }
}
