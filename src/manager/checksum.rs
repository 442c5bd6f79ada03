//! Checksum sidecar files
//!
//! Writes `<file>.sha256` next to every installed artifact so later
//! consumers can verify the cached content without going back to a remote.

use crate::error::{RepoError, RepoResult};
use crate::manager::listener::{LocalRepositoryEvent, LocalRepositoryListener};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of the checksum sidecar
pub const SHA256_EXTENSION: &str = "sha256";

/// Listener persisting SHA-256 checksums of installed artifacts
#[derive(Debug, Default, Clone, Copy)]
pub struct ChecksumListener;

impl ChecksumListener {
    /// Path of the sidecar for `file`
    pub fn sidecar_path(file: &Path) -> PathBuf {
        let mut name = file.as_os_str().to_owned();
        name.push(".");
        name.push(SHA256_EXTENSION);
        PathBuf::from(name)
    }
}

/// Hash a file's contents using SHA256, returning lowercase hex
fn hash_file_contents(path: &Path) -> RepoResult<String> {
    let contents = fs::read(path)
        .map_err(|e| RepoError::io(format!("reading artifact {}", path.display()), e))?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    Ok(hex::encode(hasher.finalize()))
}

impl LocalRepositoryListener for ChecksumListener {
    fn name(&self) -> &'static str {
        "checksum"
    }

    fn artifact_installed(&self, event: &LocalRepositoryEvent<'_>) -> RepoResult<()> {
        let hash = hash_file_contents(event.file)?;
        let sidecar = Self::sidecar_path(event.file);

        fs::write(&sidecar, &hash)
            .map_err(|e| RepoError::io(format!("writing checksum {}", sidecar.display()), e))?;

        debug!("Wrote checksum for {}: {}", event.artifact, hash);
        Ok(())
    }
}
