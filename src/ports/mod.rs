//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generation pipeline and a
//! remote service (repository metadata, text completion).
//! Implementations live in `src/adapters/`.

pub mod github;
pub mod llm;

use std::future::Future;
use std::pin::Pin;

use crate::error::GenerationError;

/// Boxed future returned by every port method, keeping the traits dyn-compatible.
pub type PortFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, GenerationError>> + Send + 'a>>;

pub use github::{License, Owner, RepositoryHost, RepositoryMetadata};
pub use llm::{CompletionRequest, LlmClient};
