//! Manager for the classic local repository layout

use crate::error::{RepoError, RepoResult};
use crate::layout::{artifact_path, metadata_path, repository_key, DigestAlgorithm};
use crate::manager::listener::{LocalRepositoryEvent, LocalRepositoryListener, Origin};
use crate::manager::{LocalArtifactResult, LocalRepositoryManager};
use crate::model::{Artifact, LocalRepository, Metadata, RemoteRepository};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Repository key used for locally maintained metadata
pub const LOCAL_KEY: &str = "local";

/// Local repository manager for the classic layout.
///
/// Artifacts from every remote share one location; only metadata is kept
/// apart per repository key. Holds no mutable state, so one instance can
/// serve concurrent callers.
pub struct SimpleLocalRepositoryManager {
    repository: LocalRepository,
    digest: DigestAlgorithm,
    listeners: Vec<Arc<dyn LocalRepositoryListener>>,
}

impl SimpleLocalRepositoryManager {
    /// Create a manager rooted at `basedir`
    pub fn new(basedir: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self::with_repository(LocalRepository::new(basedir)?))
    }

    /// Create a manager for an existing repository descriptor
    pub fn with_repository(repository: LocalRepository) -> Self {
        debug!(
            "Local repository at {} ({})",
            repository.basedir().display(),
            repository.layout()
        );
        Self {
            repository,
            digest: DigestAlgorithm::detect(),
            listeners: Vec::new(),
        }
    }

    /// Use a specific digest algorithm for repository keys
    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    /// Register a listener for install notifications
    pub fn with_listener(mut self, listener: Arc<dyn LocalRepositoryListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }

    /// Repository key for metadata fetched from `repository` in `context`
    pub fn repository_key(&self, repository: &RemoteRepository, context: &str) -> String {
        repository_key(repository, context, self.digest)
    }

    fn notify(&self, artifact: &Artifact, origin: Option<Origin<'_>>) {
        if self.listeners.is_empty() {
            return;
        }

        let file = self
            .repository
            .basedir()
            .join(self.path_for_local_artifact(artifact));
        let event = LocalRepositoryEvent {
            repository: &self.repository,
            artifact,
            file: &file,
            origin,
        };

        for listener in &self.listeners {
            if let Err(e) = listener.artifact_installed(&event) {
                warn!("Listener {} failed for {}: {}", listener.name(), artifact, e);
            }
        }
    }
}

impl LocalRepositoryManager for SimpleLocalRepositoryManager {
    fn repository(&self) -> &LocalRepository {
        &self.repository
    }

    fn path_for_local_artifact(&self, artifact: &Artifact) -> String {
        artifact_path(artifact)
    }

    fn path_for_remote_artifact(
        &self,
        artifact: &Artifact,
        _repository: &RemoteRepository,
        _context: &str,
    ) -> String {
        artifact_path(artifact)
    }

    fn path_for_local_metadata(&self, metadata: &Metadata) -> String {
        metadata_path(metadata, LOCAL_KEY)
    }

    fn path_for_remote_metadata(
        &self,
        metadata: &Metadata,
        repository: &RemoteRepository,
        context: &str,
    ) -> String {
        metadata_path(metadata, &self.repository_key(repository, context))
    }

    fn find(&self, artifact: &Artifact) -> RepoResult<LocalArtifactResult> {
        let file = self
            .repository
            .basedir()
            .join(self.path_for_local_artifact(artifact));

        match std::fs::metadata(&file) {
            Ok(meta) if meta.is_file() => {
                debug!("Found {} at {}", artifact, file.display());
                Ok(LocalArtifactResult::Found(file))
            }
            Ok(_) => Ok(LocalArtifactResult::NotFound),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                debug!("Not cached: {}", artifact);
                Ok(LocalArtifactResult::NotFound)
            }
            Err(e) => Err(RepoError::io(format!("checking {}", file.display()), e)),
        }
    }

    fn add_local_artifact(&self, artifact: &Artifact) {
        self.notify(artifact, None);
    }

    fn add_remote_artifact(&self, artifact: &Artifact, repository: &RemoteRepository, context: &str) {
        self.notify(
            artifact,
            Some(Origin {
                repository,
                context,
            }),
        );
    }
}
