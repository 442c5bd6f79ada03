//! Install notifications

use crate::error::RepoResult;
use crate::model::{Artifact, LocalRepository, RemoteRepository};
use std::path::Path;

/// Where an installed artifact was downloaded from
#[derive(Debug, Clone, Copy)]
pub struct Origin<'a> {
    pub repository: &'a RemoteRepository,
    pub context: &'a str,
}

/// An artifact has been written into the local repository
#[derive(Debug, Clone, Copy)]
pub struct LocalRepositoryEvent<'a> {
    /// The repository that was updated
    pub repository: &'a LocalRepository,
    /// The installed artifact
    pub artifact: &'a Artifact,
    /// Absolute path of the installed file
    pub file: &'a Path,
    /// Remote origin, `None` for locally built artifacts
    pub origin: Option<Origin<'a>>,
}

/// Receives install notifications from a repository manager.
///
/// Errors are logged by the manager and never reach the installer.
pub trait LocalRepositoryListener: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    fn artifact_installed(&self, event: &LocalRepositoryEvent<'_>) -> RepoResult<()>;
}
