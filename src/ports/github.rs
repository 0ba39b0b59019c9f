//! Repository metadata port.

use serde::{Deserialize, Serialize};

use super::PortFuture;
use crate::reference::RepositoryReference;

/// Account that owns a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Login name.
    #[serde(default)]
    pub login: String,
    /// Profile page URL.
    #[serde(default)]
    pub html_url: String,
}

/// License attached to a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Human-readable name, e.g. "MIT License".
    #[serde(default)]
    pub name: Option<String>,
    /// SPDX short identifier, e.g. "MIT".
    #[serde(default)]
    pub spdx_id: Option<String>,
}

/// Repository attributes and statistics, decoded verbatim from the metadata endpoint.
///
/// Absent fields decode to `None`/zero rather than failing. Values are never
/// modified after decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    /// Repository name.
    #[serde(default)]
    pub name: String,
    /// Owning account.
    #[serde(default)]
    pub owner: Owner,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language.
    #[serde(default)]
    pub language: Option<String>,
    /// License, when one is detected.
    #[serde(default)]
    pub license: Option<License>,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u64,
    /// Fork count.
    #[serde(default)]
    pub forks_count: u64,
}

impl RepositoryMetadata {
    /// Description, treating an empty string as absent.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// Primary language, treating an empty string as absent.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        non_empty(self.language.as_deref())
    }

    /// License name, treating an empty string as absent.
    #[must_use]
    pub fn license_name(&self) -> Option<&str> {
        non_empty(self.license.as_ref().and_then(|l| l.name.as_deref()))
    }

    /// SPDX identifier of the license, treating an empty string as absent.
    #[must_use]
    pub fn license_spdx(&self) -> Option<&str> {
        non_empty(self.license.as_ref().and_then(|l| l.spdx_id.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Looks up repository metadata on a hosting service.
pub trait RepositoryHost: Send + Sync {
    /// Fetches metadata for `reference` with a single unauthenticated request.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::RepositoryNotFoundOrRateLimited` on a
    /// non-success status, `GenerationError::InvalidMetadataResponse` when
    /// the body cannot be decoded, and `GenerationError::Transport` when no
    /// response arrives.
    fn fetch_metadata(&self, reference: &RepositoryReference) -> PortFuture<'_, RepositoryMetadata>;
}
