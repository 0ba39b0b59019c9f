//! Recording adapter for the `RepositoryHost` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::format::{FETCH_METADATA, GITHUB_PORT};
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{PortFuture, RepositoryHost, RepositoryMetadata};
use crate::reference::RepositoryReference;

/// Records metadata lookups while delegating to an inner implementation.
pub struct RecordingRepositoryHost {
    inner: Box<dyn RepositoryHost>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingRepositoryHost {
    /// Wraps `inner`, writing every lookup into `recorder`.
    pub fn new(inner: Box<dyn RepositoryHost>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl RepositoryHost for RecordingRepositoryHost {
    fn fetch_metadata(
        &self,
        reference: &RepositoryReference,
    ) -> PortFuture<'_, RepositoryMetadata> {
        let reference = reference.clone();
        Box::pin(async move {
            let result = self.inner.fetch_metadata(&reference).await;
            record_result(
                &self.recorder,
                GITHUB_PORT,
                FETCH_METADATA,
                &reference,
                &result,
            );
            result
        })
    }
}
