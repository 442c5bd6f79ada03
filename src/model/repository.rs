//! Remote and local repository descriptors

use crate::error::{RepoError, RepoResult};
use crate::model::validate_segment;
use std::path::{Path, PathBuf};

/// Type tag of the classic two-level local repository layout
pub const SIMPLE_LAYOUT: &str = "simple";

/// A remote repository artifacts and metadata can be fetched from.
///
/// A repository manager serves dynamically composed content (a proxy or a
/// group of mirrored repositories), so what it returns under one id can
/// vary with the request context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    id: String,
    url: String,
    repository_manager: bool,
    mirrored: Vec<RemoteRepository>,
}

impl RemoteRepository {
    /// Create a static repository with the given id.
    ///
    /// The id becomes part of cached metadata file names, so it must be a
    /// valid path segment.
    pub fn new(id: &str, url: &str) -> RepoResult<Self> {
        validate_segment("repository id", id, true)?;
        Ok(Self {
            id: id.to_string(),
            url: url.to_string(),
            repository_manager: false,
            mirrored: Vec::new(),
        })
    }

    /// Mark this repository as serving dynamic content
    pub fn with_repository_manager(mut self, repository_manager: bool) -> Self {
        self.repository_manager = repository_manager;
        self
    }

    /// Set the repositories this one mirrors
    pub fn with_mirrored(mut self, mirrored: Vec<RemoteRepository>) -> Self {
        self.mirrored = mirrored;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_repository_manager(&self) -> bool {
        self.repository_manager
    }

    pub fn mirrored_repositories(&self) -> &[RemoteRepository] {
        &self.mirrored
    }
}

/// The local repository: a base directory plus a layout type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
    basedir: PathBuf,
    layout: String,
}

impl LocalRepository {
    /// Create a local repository using the simple layout.
    ///
    /// The base directory is made absolute, and canonical when it already
    /// exists. An empty path is rejected.
    pub fn new(basedir: impl AsRef<Path>) -> RepoResult<Self> {
        Self::with_layout(basedir, SIMPLE_LAYOUT)
    }

    pub fn with_layout(basedir: impl AsRef<Path>, layout: &str) -> RepoResult<Self> {
        let basedir = basedir.as_ref();
        if basedir.as_os_str().is_empty() {
            return Err(RepoError::BasedirMissing);
        }

        let basedir = match basedir.canonicalize() {
            Ok(canonical) => canonical,
            Err(_) => std::path::absolute(basedir).map_err(|e| {
                RepoError::io(format!("resolving {}", basedir.display()), e)
            })?,
        };

        Ok(Self {
            basedir,
            layout: layout.to_string(),
        })
    }

    /// Absolute base directory of the repository
    pub fn basedir(&self) -> &Path {
        &self.basedir
    }

    /// Layout type tag, `"simple"` for the classic layout
    pub fn layout(&self) -> &str {
        &self.layout
    }
}
