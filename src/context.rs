//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::{LiveLlmClient, LiveRepositoryHost};
use crate::adapters::recording::{RecordingLlmClient, RecordingRepositoryHost};
use crate::adapters::replaying::{ReplayingLlmClient, ReplayingRepositoryHost};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Settings;
use crate::ports::{LlmClient, RepositoryHost};

/// Bundles the two external boundaries of a generation cycle.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying); the orchestrator only ever sees the traits.
pub struct ServiceContext {
    /// Repository metadata lookups.
    pub github: Box<dyn RepositoryHost>,
    /// Text completions.
    pub llm: Box<dyn LlmClient>,
}

impl ServiceContext {
    /// Assembles a context from arbitrary port implementations.
    #[must_use]
    pub fn from_parts(github: Box<dyn RepositoryHost>, llm: Box<dyn LlmClient>) -> Self {
        Self { github, llm }
    }

    /// Creates a live context talking to the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error string if an HTTP client cannot be constructed.
    pub fn live(settings: &Settings) -> Result<Self, String> {
        Ok(Self {
            github: Box::new(LiveRepositoryHost::new(settings)?),
            llm: Box::new(LiveLlmClient::new(settings)?),
        })
    }

    /// Creates a live context that also records every call.
    ///
    /// Drop the context before calling [`RecordingSession::finish`] on the
    /// returned session.
    ///
    /// # Errors
    ///
    /// Returns an error string if an HTTP client cannot be constructed.
    pub fn recording(
        settings: &Settings,
        path: PathBuf,
    ) -> Result<(Self, RecordingSession), String> {
        let name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => "readmegen".to_string(),
        };
        let session = RecordingSession::new(path, name);
        let live = Self::live(settings)?;

        let ctx = Self {
            github: Box::new(RecordingRepositoryHost::new(live.github, session.recorder())),
            llm: Box::new(RecordingLlmClient::new(live.llm, session.recorder())),
        };
        Ok((ctx, session))
    }

    /// Creates a context whose ports answer from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette =
            Cassette::from_yaml(&content).map_err(|e| format!("{e} ({})", path.display()))?;
        Ok(Self::replaying_cassette(&cassette))
    }

    /// Creates a replaying context from an already-loaded cassette.
    #[must_use]
    pub fn replaying_cassette(cassette: &Cassette) -> Self {
        // One replayer per port keeps their cursors independent.
        let github_replayer = Arc::new(Mutex::new(CassetteReplayer::new(cassette)));
        let llm_replayer = Arc::new(Mutex::new(CassetteReplayer::new(cassette)));
        Self {
            github: Box::new(ReplayingRepositoryHost::new(github_replayer)),
            llm: Box::new(ReplayingLlmClient::new(llm_replayer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::cassette::format::Interaction;
    use crate::ports::CompletionRequest;
    use crate::reference::RepositoryReference;

    #[tokio::test]
    async fn replaying_context_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.cassette.yaml");
        let cassette = Cassette {
            name: "hello".into(),
            recorded_at: Utc::now(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "github".into(),
                    method: "fetch_metadata".into(),
                    input: json!({}),
                    output: json!({"Ok": {"name": "Hello-World"}}),
                },
                Interaction {
                    seq: 1,
                    port: "llm".into(),
                    method: "complete".into(),
                    input: json!({}),
                    output: json!({"Ok": "# Hello-World"}),
                },
            ],
        };
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        let reference = RepositoryReference {
            owner: "octocat".into(),
            name: "Hello-World".into(),
        };
        let metadata = ctx.github.fetch_metadata(&reference).await.unwrap();
        assert_eq!(metadata.name, "Hello-World");
        let request = CompletionRequest {
            model: "m".into(),
            prompt: "p".into(),
        };
        assert_eq!(ctx.llm.complete(&request).await.unwrap(), "# Hello-World");
    }

    #[test]
    fn missing_cassette_is_an_error() {
        let path = Path::new("/nonexistent/readmegen.yaml");
        let err = ServiceContext::replaying(path).err().unwrap();
        assert!(err.contains("Failed to read cassette file"));
    }
}
