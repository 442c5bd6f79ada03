//! Local repository manager
//!
//! The facade callers use to place and find content in the local
//! repository. Path questions are pure; `find` is the only operation that
//! touches the filesystem, and the `add_*` hooks fan out to registered
//! listeners.

pub mod checksum;
pub mod factory;
pub mod journal;
pub mod listener;
pub mod simple;

pub use checksum::ChecksumListener;
pub use factory::create_manager;
pub use journal::InstallJournal;
pub use listener::{LocalRepositoryEvent, LocalRepositoryListener, Origin};
pub use simple::SimpleLocalRepositoryManager;

use crate::error::RepoResult;
use crate::model::{Artifact, LocalRepository, Metadata, RemoteRepository};
use std::path::{Path, PathBuf};

/// Outcome of looking up an artifact in the local repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalArtifactResult {
    /// The artifact is cached at this absolute path
    Found(PathBuf),
    /// The artifact is not cached
    NotFound,
}

impl LocalArtifactResult {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}

/// Local repository manager interface
///
/// Every path returned is relative to the repository base directory and
/// uses `/` as separator.
pub trait LocalRepositoryManager: Send + Sync {
    /// The repository this manager operates on
    fn repository(&self) -> &LocalRepository;

    /// Path of a locally installed artifact
    fn path_for_local_artifact(&self, artifact: &Artifact) -> String;

    /// Path of an artifact downloaded from `repository` in `context`
    fn path_for_remote_artifact(
        &self,
        artifact: &Artifact,
        repository: &RemoteRepository,
        context: &str,
    ) -> String;

    /// Path of locally maintained metadata
    fn path_for_local_metadata(&self, metadata: &Metadata) -> String;

    /// Path of metadata downloaded from `repository` in `context`
    fn path_for_remote_metadata(
        &self,
        metadata: &Metadata,
        repository: &RemoteRepository,
        context: &str,
    ) -> String;

    /// Look up an artifact.
    ///
    /// A miss is `Ok(LocalArtifactResult::NotFound)`; an error means the
    /// repository could not be inspected.
    fn find(&self, artifact: &Artifact) -> RepoResult<LocalArtifactResult>;

    /// Called once after a locally built artifact has been fully written
    fn add_local_artifact(&self, artifact: &Artifact);

    /// Called once after a downloaded artifact has been fully written
    fn add_remote_artifact(&self, artifact: &Artifact, repository: &RemoteRepository, context: &str);
}
