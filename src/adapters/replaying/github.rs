//! Replaying adapter for the `RepositoryHost` port.

use std::sync::{Arc, Mutex};

use super::next_result;
use crate::cassette::format::{FETCH_METADATA, GITHUB_PORT};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{PortFuture, RepositoryHost, RepositoryMetadata};
use crate::reference::RepositoryReference;

/// Serves recorded metadata lookups from a cassette.
pub struct ReplayingRepositoryHost {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingRepositoryHost {
    /// Create a replaying host backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl RepositoryHost for ReplayingRepositoryHost {
    fn fetch_metadata(
        &self,
        _reference: &RepositoryReference,
    ) -> PortFuture<'_, RepositoryMetadata> {
        let result = next_result(&self.replayer, GITHUB_PORT, FETCH_METADATA);
        Box::pin(async move { result })
    }
}
