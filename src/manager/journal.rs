//! Install journal
//!
//! Appends one JSON line per installed artifact, giving a record of what
//! entered the local repository and where it came from.

use crate::error::{RepoError, RepoResult};
use crate::manager::listener::{LocalRepositoryEvent, LocalRepositoryListener};
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default journal file name, relative to the repository base directory
pub const DEFAULT_JOURNAL_FILE: &str = ".install-journal.jsonl";

/// File-based journal that appends JSON lines
#[derive(Debug, Clone)]
pub struct InstallJournal {
    path: PathBuf,
}

impl InstallJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(line.as_bytes())?;
        file.flush()
    }
}

impl LocalRepositoryListener for InstallJournal {
    fn name(&self) -> &'static str {
        "journal"
    }

    fn artifact_installed(&self, event: &LocalRepositoryEvent<'_>) -> RepoResult<()> {
        let entry = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event": "artifact.installed",
            "artifact": event.artifact.to_string(),
            "path": event.file.display().to_string(),
            "repository": event.origin.map(|o| o.repository.id().to_string()),
            "context": event.origin.map(|o| o.context.to_string()),
        });

        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        self.append(&line)
            .map_err(|e| RepoError::io(format!("appending to {}", self.path.display()), e))
    }
}
