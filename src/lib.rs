//! localrepo - Local artifact repository layer
//!
//! Derives where artifacts and metadata live under a local repository root,
//! computes repository keys for content fetched through repository
//! managers, and checks whether an artifact is already cached.

pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod manager;
pub mod model;
pub mod resolver;

pub use error::{RepoError, RepoResult};
pub use manager::{LocalArtifactResult, LocalRepositoryManager, SimpleLocalRepositoryManager};
pub use model::{Artifact, LocalRepository, Metadata, RemoteRepository};
