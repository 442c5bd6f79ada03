//! Version resolution contract
//!
//! Resolves a metaversion to a concrete version, for example `1.0-SNAPSHOT`
//! to `1.0-20090208.132618-23`, or `RELEASE`/`LATEST` to `2.0`. The
//! algorithm lives with the remote access layer; this crate only defines
//! the interface and how a result is applied to an artifact.

use crate::error::RepoResult;
use crate::model::{Artifact, RemoteRepository};

/// A request to resolve the version of an artifact
#[derive(Debug, Clone)]
pub struct VersionRequest {
    pub artifact: Artifact,
    /// Repositories to consult, in order
    pub repositories: Vec<RemoteRepository>,
    /// Request context, as used for repository keys
    pub context: String,
}

impl VersionRequest {
    pub fn new(artifact: Artifact, repositories: Vec<RemoteRepository>, context: &str) -> Self {
        Self {
            artifact,
            repositories,
            context: context.to_string(),
        }
    }
}

/// The outcome of a version resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResult {
    /// The concrete version
    pub version: String,
    /// Repository the version was resolved from, `None` when local
    pub repository: Option<RemoteRepository>,
}

impl VersionResult {
    /// The requested artifact with the resolved version applied
    pub fn apply(&self, artifact: &Artifact) -> RepoResult<Artifact> {
        artifact.with_version(&self.version)
    }
}

/// Resolves metaversions to concrete versions
pub trait VersionResolver: Send + Sync {
    fn resolve_version(&self, request: &VersionRequest) -> RepoResult<VersionResult>;
}
