//! Manager factory
//!
//! Builds a repository manager from configuration: base directory, digest
//! algorithm, and the listeners that are switched on.

use crate::config::Config;
use crate::error::RepoResult;
use crate::layout::DigestAlgorithm;
use crate::manager::{
    ChecksumListener, InstallJournal, LocalRepositoryManager, SimpleLocalRepositoryManager,
};
use std::sync::Arc;
use tracing::debug;

/// Create the local repository manager described by `config`
pub fn create_manager(config: &Config) -> RepoResult<SimpleLocalRepositoryManager> {
    let digest = DigestAlgorithm::from_preference(config.repository.digest)?;
    let mut manager =
        SimpleLocalRepositoryManager::new(&config.repository.basedir)?.with_digest(digest);

    if config.listeners.checksums {
        debug!("Checksum sidecars enabled");
        manager = manager.with_listener(Arc::new(ChecksumListener));
    }

    if config.listeners.journal {
        let path = manager
            .repository()
            .basedir()
            .join(&config.listeners.journal_file);
        debug!("Install journal at {}", path.display());
        manager = manager.with_listener(Arc::new(InstallJournal::new(path)));
    }

    Ok(manager)
}
