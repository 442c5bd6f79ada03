//! Error types for localrepo
//!
//! All modules use `RepoResult<T>` as their return type. A lookup miss is
//! never an error; it is reported through `LocalArtifactResult::NotFound`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for localrepo operations
pub type RepoResult<T> = Result<T, RepoError>;

/// All errors that can occur in localrepo
#[derive(Error, Debug)]
pub enum RepoError {
    // Repository errors
    #[error("Local repository base directory has not been specified")]
    BasedirMissing,

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid artifact coordinates '{0}': expected <groupId>:<artifactId>[:<extension>[:<classifier>]]:<version>")]
    InvalidCoordinateString(String),

    #[error("Remote repository not configured: {0}")]
    RemoteNotFound(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl RepoError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid coordinate error
    pub fn invalid(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::BasedirMissing => {
                Some("Pass --basedir or set repository.basedir in the config file")
            }
            Self::RemoteNotFound(_) => Some("Add a [[remotes]] entry to the config file"),
            Self::InvalidCoordinateString(_) => Some("Example: org.example:lib:jar:sources:1.0"),
            Self::Io { .. } => Some("Check permissions on the local repository directory"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RepoError::BasedirMissing;
        assert!(err.to_string().contains("base directory"));
    }

    #[test]
    fn invalid_coordinate_display() {
        let err = RepoError::invalid("group id", "../etc", "must not contain '..'");
        assert_eq!(
            err.to_string(),
            "Invalid group id '../etc': must not contain '..'"
        );
    }

    #[test]
    fn error_hint() {
        let err = RepoError::RemoteNotFound("central".to_string());
        assert_eq!(err.hint(), Some("Add a [[remotes]] entry to the config file"));
        assert_eq!(RepoError::User("x".to_string()).hint(), None);
    }
}
