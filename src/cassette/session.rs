//! Recording session shared by the recording adapters.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::recorder::CassetteRecorder;

/// Owns the recorder that every recording adapter in one run writes into.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Start a session that will write to `path` when finished.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            recorder: Arc::new(Mutex::new(CassetteRecorder::new(path, name))),
        }
    }

    /// Handle for a recording adapter.
    #[must_use]
    pub fn recorder(&self) -> Arc<Mutex<CassetteRecorder>> {
        Arc::clone(&self.recorder)
    }

    /// Write the cassette to disk.
    ///
    /// All adapters holding a handle must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if adapters still hold the recorder or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold the cassette recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn finishes_once_handles_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.cassette.yaml");
        let session = RecordingSession::new(&path, "session");

        let handle = session.recorder();
        let mut recorder = handle.lock().unwrap();
        recorder.record("llm", "complete", json!({}), json!({"Ok": "x"}));
        drop(recorder);
        drop(handle);

        assert_eq!(session.finish().unwrap(), path);
        assert!(path.exists());
    }

    #[test]
    fn refuses_to_finish_while_held() {
        let dir = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(dir.path().join("held.yaml"), "held");
        let _handle = session.recorder();
        assert!(session.finish().unwrap_err().contains("still hold"));
    }
}
