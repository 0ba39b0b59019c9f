//! Sequences parse → fetch metadata → build prompt → complete, and owns the state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::state::GenerationState;
use crate::context::ServiceContext;
use crate::error::GenerationError;
use crate::ports::{CompletionRequest, RepositoryMetadata};
use crate::prompt::{build_prompt, GenerationRequest};
use crate::reference::RepositoryReference;

/// Returned when a generation is requested while another is in flight.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a README generation is already in progress")]
pub struct Busy;

type Outcome = Result<(RepositoryMetadata, String), GenerationError>;

#[derive(Debug, Default)]
struct Shared {
    state: GenerationState,
    metadata: Option<RepositoryMetadata>,
    // Bumped on every start and every abandon; stale cycles see a mismatch.
    cycle: u64,
}

/// Drives generation cycles against a [`ServiceContext`].
///
/// All mutation of the state goes through this type. Readers get clones via
/// [`Orchestrator::snapshot`] and [`Orchestrator::metadata`].
pub struct Orchestrator<'a> {
    ctx: &'a ServiceContext,
    model: String,
    shared: Mutex<Shared>,
}

impl<'a> Orchestrator<'a> {
    /// Creates an idle orchestrator that requests completions from `model`.
    pub fn new(ctx: &'a ServiceContext, model: impl Into<String>) -> Self {
        Self {
            ctx,
            model: model.into(),
            shared: Mutex::new(Shared::default()),
        }
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> GenerationState {
        self.lock().state.clone()
    }

    /// Metadata published by the current or last cycle.
    ///
    /// Set as soon as the lookup succeeds, so it is visible while the
    /// completion is still in flight and after the completion fails.
    #[must_use]
    pub fn metadata(&self) -> Option<RepositoryMetadata> {
        self.lock().metadata.clone()
    }

    /// Runs one full cycle and returns the state that cycle ended in.
    ///
    /// Pipeline failures end in [`GenerationState::Failed`]; they are never
    /// returned as errors. A cycle detached by [`Orchestrator::abandon`]
    /// returns [`GenerationState::Idle`], whatever a later cycle stored.
    ///
    /// # Errors
    ///
    /// Returns [`Busy`] without touching the state when a cycle is already
    /// in flight.
    pub async fn generate(&self, url: &str, instructions: &str) -> Result<GenerationState, Busy> {
        let cycle = self.begin()?;

        let state = match self.run(cycle, url, instructions).await {
            Some(outcome) => self.finish(cycle, outcome),
            None => {
                debug!(cycle, "cycle abandoned before completion request");
                GenerationState::Idle
            }
        };

        Ok(state)
    }

    /// Detaches the in-flight cycle.
    ///
    /// Its network calls are allowed to finish but their results are
    /// discarded. The state returns to [`GenerationState::Idle`].
    pub fn abandon(&self) {
        let mut shared = self.lock();
        if shared.state.is_loading() {
            info!(cycle = shared.cycle, "abandoning generation");
            shared.cycle += 1;
            shared.state = GenerationState::Idle;
            shared.metadata = None;
        }
    }

    fn begin(&self) -> Result<u64, Busy> {
        let mut shared = self.lock();
        if shared.state.is_loading() {
            warn!("generation requested while one is in flight");
            return Err(Busy);
        }
        shared.cycle += 1;
        shared.state = GenerationState::Loading;
        shared.metadata = None;
        Ok(shared.cycle)
    }

    /// `None` when the cycle was abandoned between the two calls.
    async fn run(&self, cycle: u64, url: &str, instructions: &str) -> Option<Outcome> {
        let reference = match RepositoryReference::parse(url) {
            Ok(reference) => reference,
            Err(err) => return Some(Err(err)),
        };
        info!(cycle, %reference, "generation started");

        let metadata = match self.ctx.github.fetch_metadata(&reference).await {
            Ok(metadata) => metadata,
            Err(err) => return Some(Err(err)),
        };
        if !self.publish_metadata(cycle, &metadata) {
            return None;
        }

        let prompt = build_prompt(GenerationRequest {
            metadata: &metadata,
            user_instructions: instructions,
        });
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt,
        };
        let completion = self.ctx.llm.complete(&request).await;
        Some(completion.map(|text| (metadata, text)))
    }

    fn publish_metadata(&self, cycle: u64, metadata: &RepositoryMetadata) -> bool {
        let mut shared = self.lock();
        if shared.cycle != cycle {
            return false;
        }
        debug!(
            cycle,
            stars = metadata.stargazers_count,
            forks = metadata.forks_count,
            "metadata published"
        );
        shared.metadata = Some(metadata.clone());
        true
    }

    /// Stores the outcome and returns it as a state, or returns
    /// [`GenerationState::Idle`] untouched when the cycle was superseded.
    fn finish(&self, cycle: u64, outcome: Outcome) -> GenerationState {
        let mut shared = self.lock();
        if shared.cycle != cycle {
            debug!(cycle, current = shared.cycle, "discarding stale result");
            return GenerationState::Idle;
        }
        shared.state = match outcome {
            Ok((metadata, result)) => {
                info!(cycle, bytes = result.len(), "generation succeeded");
                GenerationState::Success { result, metadata }
            }
            Err(err) => {
                warn!(cycle, error = ?err, "generation failed");
                GenerationState::Failed {
                    reason: err.to_string(),
                }
            }
        };
        shared.state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
