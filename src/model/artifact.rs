//! Artifact coordinates

use crate::error::{RepoError, RepoResult};
use crate::model::{validate_group, validate_segment};
use std::fmt;
use std::str::FromStr;

const SNAPSHOT: &str = "SNAPSHOT";
const DEFAULT_EXTENSION: &str = "jar";

/// A concrete build output: group, artifact id, version, classifier and
/// file extension.
///
/// The base version is derived from the resolved version. A timestamped
/// snapshot such as `1.0-20090208.132618-23` has the base version
/// `1.0-SNAPSHOT`; every other version is its own base version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    base_version: String,
    version: String,
    classifier: String,
    extension: String,
}

impl Artifact {
    /// Create an artifact, validating every coordinate field.
    ///
    /// `classifier` and `extension` may be empty.
    pub fn new(
        group_id: &str,
        artifact_id: &str,
        classifier: &str,
        extension: &str,
        version: &str,
    ) -> RepoResult<Self> {
        validate_group("group id", group_id, true)?;
        validate_segment("artifact id", artifact_id, true)?;
        validate_segment("version", version, true)?;
        validate_segment("classifier", classifier, false)?;
        validate_segment("extension", extension, false)?;

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            base_version: to_base_version(version),
            version: version.to_string(),
            classifier: classifier.to_string(),
            extension: extension.to_string(),
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// The possibly unresolved version used for the version directory
    pub fn base_version(&self) -> &str {
        &self.base_version
    }

    /// The resolved version used in the file name
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether this artifact belongs to a snapshot version
    pub fn is_snapshot(&self) -> bool {
        self.base_version.ends_with(SNAPSHOT)
    }

    /// Copy of this artifact with a different resolved version
    pub fn with_version(&self, version: &str) -> RepoResult<Self> {
        validate_segment("version", version, true)?;
        Ok(Self {
            base_version: to_base_version(version),
            version: version.to_string(),
            ..self.clone()
        })
    }
}

/// Map a timestamped snapshot version to its `-SNAPSHOT` base version.
fn to_base_version(version: &str) -> String {
    match snapshot_prefix(version) {
        Some(prefix) => format!("{}{}", prefix, SNAPSHOT),
        None => version.to_string(),
    }
}

/// Returns the part before `yyyyMMdd.HHmmss-N` (including its trailing
/// dash) when `version` is a timestamped snapshot.
fn snapshot_prefix(version: &str) -> Option<&str> {
    let (rest, build) = version.rsplit_once('-')?;
    if build.is_empty() || !build.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (prefix, timestamp) = match rest.rsplit_once('-') {
        Some((head, ts)) => (&version[..head.len() + 1], ts),
        None => ("", rest),
    };

    let (date, time) = timestamp.split_once('.')?;
    let digits = |s: &str, n: usize| s.len() == n && s.bytes().all(|b| b.is_ascii_digit());
    if digits(date, 8) && digits(time, 6) {
        Some(prefix)
    } else {
        None
    }
}

impl FromStr for Artifact {
    type Err = RepoError;

    /// Parse `<groupId>:<artifactId>[:<extension>[:<classifier>]]:<version>`.
    fn from_str(coords: &str) -> RepoResult<Self> {
        let parts: Vec<&str> = coords.split(':').collect();

        let (group, artifact, extension, classifier, version) = match parts.as_slice() {
            [g, a, v] => (*g, *a, "", "", *v),
            [g, a, e, v] => (*g, *a, *e, "", *v),
            [g, a, e, c, v] => (*g, *a, *e, *c, *v),
            _ => return Err(RepoError::InvalidCoordinateString(coords.to_string())),
        };

        if group.is_empty() || artifact.is_empty() || version.is_empty() {
            return Err(RepoError::InvalidCoordinateString(coords.to_string()));
        }

        let extension = if extension.is_empty() {
            DEFAULT_EXTENSION
        } else {
            extension
        };

        Self::new(group, artifact, classifier, extension, version)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.extension)?;
        if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}
