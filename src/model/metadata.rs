//! Repository metadata coordinates

use crate::error::RepoResult;
use crate::model::{validate_group, validate_segment};
use std::fmt;

/// Default metadata file name template
pub const MAVEN_METADATA_XML: &str = "maven-metadata.xml";

/// Auxiliary descriptor content scoped to a group, an artifact, or a
/// single version.
///
/// Any of group id, artifact id and version may be empty. The `type` is a
/// file name template such as `maven-metadata.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Metadata {
    group_id: String,
    artifact_id: String,
    version: String,
    metadata_type: String,
}

impl Metadata {
    pub fn new(
        group_id: &str,
        artifact_id: &str,
        version: &str,
        metadata_type: &str,
    ) -> RepoResult<Self> {
        validate_group("group id", group_id, false)?;
        validate_segment("artifact id", artifact_id, false)?;
        validate_segment("version", version, false)?;
        validate_segment("metadata type", metadata_type, true)?;

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            metadata_type: metadata_type.to_string(),
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The file name template of this metadata
    pub fn metadata_type(&self) -> &str {
        &self.metadata_type
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = [&self.group_id, &self.artifact_id, &self.version]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(":");
        if scope.is_empty() {
            write!(f, "{}", self.metadata_type)
        } else {
            write!(f, "{}/{}", scope, self.metadata_type)
        }
    }
}
