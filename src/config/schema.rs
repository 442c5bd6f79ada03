//! Configuration schema for localrepo
//!
//! Configuration is stored at `~/.config/localrepo/config.toml`

use crate::error::{RepoError, RepoResult};
use crate::layout::DigestPreference;
use crate::manager::journal::DEFAULT_JOURNAL_FILE;
use crate::model::RemoteRepository;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Local repository settings
    pub repository: RepositoryConfig,

    /// Install listeners
    pub listeners: ListenersConfig,

    /// Known remote repositories
    pub remotes: Vec<RemoteConfig>,
}

impl Config {
    /// Build the descriptor of a configured remote repository
    pub fn remote(&self, id: &str) -> RepoResult<RemoteRepository> {
        let remote = self
            .remotes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RepoError::RemoteNotFound(id.to_string()))?;

        let mirrored = remote
            .mirror_of
            .iter()
            .map(|m| RemoteRepository::new(m, ""))
            .collect::<RepoResult<Vec<_>>>()?;

        Ok(RemoteRepository::new(&remote.id, &remote.url)?
            .with_repository_manager(remote.repository_manager)
            .with_mirrored(mirrored))
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Local repository settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Base directory of the local repository
    pub basedir: PathBuf,

    /// Digest used for repository keys: "auto", "sha1" or "rolling"
    pub digest: DigestPreference,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            basedir: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".m2")
                .join("repository"),
            digest: DigestPreference::Auto,
        }
    }
}

/// Install listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenersConfig {
    /// Write `.sha256` sidecars for installed artifacts
    pub checksums: bool,

    /// Record installs in a JSON lines journal
    pub journal: bool,

    /// Journal location, relative paths resolve against the base directory
    pub journal_file: PathBuf,
}

impl Default for ListenersConfig {
    fn default() -> Self {
        Self {
            checksums: false,
            journal: false,
            journal_file: PathBuf::from(DEFAULT_JOURNAL_FILE),
        }
    }
}

/// A remote repository entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Repository id
    pub id: String,

    /// Repository URL
    pub url: String,

    /// Serves dynamic content (proxy or group)
    pub repository_manager: bool,

    /// Ids of the repositories this one mirrors
    pub mirror_of: Vec<String>,
}
