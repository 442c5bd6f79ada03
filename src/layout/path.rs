//! Relative paths in the classic two-level repository layout
//!
//! Artifacts live at
//! `group/as/dirs/artifactId/baseVersion/artifactId-version[-classifier].extension`.
//! Metadata lives under as much of the group/artifact/version prefix as the
//! coordinate provides, with the repository key spliced into its file name.

use crate::model::{Artifact, Metadata};

/// Relative path of an artifact file
pub fn artifact_path(artifact: &Artifact) -> String {
    let mut path = String::with_capacity(128);

    path.push_str(&artifact.group_id().replace('.', "/"));
    path.push('/');

    path.push_str(artifact.artifact_id());
    path.push('/');

    path.push_str(artifact.base_version());
    path.push('/');

    path.push_str(artifact.artifact_id());
    path.push('-');
    path.push_str(artifact.version());

    if !artifact.classifier().is_empty() {
        path.push('-');
        path.push_str(artifact.classifier());
    }

    path.push('.');
    path.push_str(artifact.extension());

    path
}

/// Relative path of a metadata file cached under `repository_key`
pub fn metadata_path(metadata: &Metadata, repository_key: &str) -> String {
    let mut path = String::with_capacity(128);

    if !metadata.group_id().is_empty() {
        path.push_str(&metadata.group_id().replace('.', "/"));
        path.push('/');

        if !metadata.artifact_id().is_empty() {
            path.push_str(metadata.artifact_id());
            path.push('/');

            if !metadata.version().is_empty() {
                path.push_str(metadata.version());
                path.push('/');
            }
        }
    }

    path.push_str(&insert_repository_key(
        metadata.metadata_type(),
        repository_key,
    ));

    path
}

/// Insert `-<key>` before the first `.` of `filename`, or append it.
fn insert_repository_key(filename: &str, repository_key: &str) -> String {
    match filename.split_once('.') {
        Some((stem, rest)) => format!("{}-{}.{}", stem, repository_key, rest),
        None => format!("{}-{}", filename, repository_key),
    }
}
