//! Recording adapters that capture interactions to cassettes.

pub mod github;
pub mod llm;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::warn;

use crate::cassette::format::encode_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::GenerationError;

pub use github::RecordingRepositoryHost;
pub use llm::RecordingLlmClient;

/// Record a port call and its result.
///
/// A value that cannot be serialized is skipped with a warning; recording
/// never changes what the caller sees.
pub(crate) fn record_result<I, T>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, GenerationError>,
) where
    I: Serialize,
    T: Serialize,
{
    let encoded = serde_json::to_value(input)
        .map_err(|e| e.to_string())
        .and_then(|input| encode_result(result).map(|output| (input, output)));

    match (encoded, recorder.lock()) {
        (Ok((input, output)), Ok(mut guard)) => guard.record(port, method, input, output),
        (Err(e), _) => warn!(port, method, error = %e, "skipping unserializable interaction"),
        (_, Err(_)) => warn!(port, method, "recorder lock poisoned; interaction dropped"),
    }
}
