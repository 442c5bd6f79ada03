//! Coordinate model
//!
//! Immutable value types describing what lives in a local repository:
//! artifacts, metadata, and the repositories they come from. Constructors
//! validate every field that ends up as a path segment, so the layout code
//! downstream can treat its inputs as trusted.

pub mod artifact;
pub mod metadata;
pub mod repository;

pub use artifact::Artifact;
pub use metadata::Metadata;
pub use repository::{LocalRepository, RemoteRepository};

use crate::error::{RepoError, RepoResult};

/// Validate a single path segment (artifact id, version, classifier, ...).
pub(crate) fn validate_segment(field: &'static str, value: &str, required: bool) -> RepoResult<()> {
    if value.is_empty() {
        if required {
            return Err(RepoError::invalid(field, value, "must not be empty"));
        }
        return Ok(());
    }
    if value.contains('/') || value.contains('\\') || value.contains('\0') {
        return Err(RepoError::invalid(
            field,
            value,
            "must not contain path separators",
        ));
    }
    if value == "." || value == ".." {
        return Err(RepoError::invalid(
            field,
            value,
            "must not be a relative path segment",
        ));
    }
    Ok(())
}

/// Validate a period-separated group id, which maps to nested directories.
pub(crate) fn validate_group(field: &'static str, value: &str, required: bool) -> RepoResult<()> {
    validate_segment(field, value, required)?;
    if !value.is_empty() && value.split('.').any(str::is_empty) {
        return Err(RepoError::invalid(
            field,
            value,
            "must not contain empty segments",
        ));
    }
    Ok(())
}
