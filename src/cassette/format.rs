//! Cassette data structures and the result encoding shared by recorder and replayer.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::GenerationError;

/// Port name under which metadata lookups are stored.
pub const GITHUB_PORT: &str = "github";
/// Method name for metadata lookups.
pub const FETCH_METADATA: &str = "fetch_metadata";
/// Port name under which completions are stored.
pub const LLM_PORT: &str = "llm";
/// Method name for completions.
pub const COMPLETE: &str = "complete";

/// A single recorded call to a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the whole recording, assigned by the recorder.
    pub seq: u64,
    /// Port name (`github` or `llm`).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Arguments the port was called with.
    pub input: Value,
    /// `{"Ok": value}` or `{"Err": error}`.
    pub output: Value,
}

/// An ordered recording of port interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error string when the text is not a valid cassette.
    pub fn from_yaml(text: &str) -> Result<Self, String> {
        serde_yaml::from_str(text).map_err(|e| format!("Failed to parse cassette: {e}"))
    }
}

/// Encodes a port result for storage.
///
/// # Errors
///
/// Returns an error string if the `Ok` value cannot be serialized.
pub fn encode_result<T: Serialize>(result: &Result<T, GenerationError>) -> Result<Value, String> {
    let encoded = match result {
        Ok(value) => json!({ "Ok": serde_json::to_value(value).map_err(|e| e.to_string())? }),
        Err(err) => json!({ "Err": serde_json::to_value(err).map_err(|e| e.to_string())? }),
    };
    Ok(encoded)
}

/// Decodes a stored port result.
///
/// # Errors
///
/// Returns the recorded `Err` payload as is. Malformed outputs surface as a
/// transport failure from the `cassette` service.
pub fn decode_result<T: DeserializeOwned>(output: Value) -> Result<T, GenerationError> {
    let malformed = |reason: String| GenerationError::Transport {
        service: "cassette".into(),
        reason,
    };

    let Value::Object(mut map) = output else {
        return Err(malformed("recorded output is not an object".into()));
    };
    if let Some(ok) = map.remove("Ok") {
        return serde_json::from_value(ok).map_err(|e| malformed(e.to_string()));
    }
    if let Some(err) = map.remove("Err") {
        let err: GenerationError =
            serde_json::from_value(err).map_err(|e| malformed(e.to_string()))?;
        return Err(err);
    }
    Err(malformed("recorded output has neither Ok nor Err".into()))
}
