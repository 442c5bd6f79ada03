//! Digest primitives for repository keys
//!
//! SHA-1 is the primary algorithm. Builds without the `sha1` feature fall
//! back to a rolling polynomial hash, which is much weaker, so selecting it
//! is always logged.

use crate::error::RepoResult;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(feature = "sha1")]
use sha1::{Digest, Sha1};

const ROLLING_SEED: i64 = 13;
const ROLLING_MULTIPLIER: i64 = 31;

/// Configured digest preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestPreference {
    /// Strongest algorithm compiled into this build
    #[default]
    Auto,
    /// Require SHA-1
    Sha1,
    /// Force the rolling hash
    Rolling,
}

/// Digest algorithm used to derive repository keys, chosen once and
/// injected into the repository manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// 160-bit SHA-1, rendered as 40 lowercase hex characters
    #[cfg(feature = "sha1")]
    Sha1,
    /// Rolling `hash * 31 + string_hash` over the inputs
    Rolling,
}

impl DigestAlgorithm {
    /// Pick the strongest algorithm available in this build
    pub fn detect() -> Self {
        #[cfg(feature = "sha1")]
        {
            Self::Sha1
        }
        #[cfg(not(feature = "sha1"))]
        {
            warn!("SHA-1 not available, repository keys use the rolling hash fallback");
            Self::Rolling
        }
    }

    /// Resolve a configured preference to an algorithm
    pub fn from_preference(preference: DigestPreference) -> RepoResult<Self> {
        match preference {
            DigestPreference::Auto => Ok(Self::detect()),
            #[cfg(feature = "sha1")]
            DigestPreference::Sha1 => Ok(Self::Sha1),
            #[cfg(not(feature = "sha1"))]
            DigestPreference::Sha1 => Err(crate::error::RepoError::User(
                "SHA-1 digests are not available in this build".to_string(),
            )),
            DigestPreference::Rolling => {
                warn!("Rolling hash selected for repository keys, collisions are more likely");
                Ok(Self::Rolling)
            }
        }
    }

    /// Start a new incremental digest
    pub fn digester(self) -> Digester {
        let state = match self {
            #[cfg(feature = "sha1")]
            Self::Sha1 => State::Sha1(Sha1::new()),
            Self::Rolling => State::Rolling(ROLLING_SEED),
        };
        Digester { state }
    }
}

impl Default for DigestAlgorithm {
    fn default() -> Self {
        Self::detect()
    }
}

/// Incremental digest over a sequence of strings.
///
/// Each string is absorbed separately; empty strings are skipped.
pub struct Digester {
    state: State,
}

enum State {
    #[cfg(feature = "sha1")]
    Sha1(Sha1),
    Rolling(i64),
}

impl Digester {
    pub fn update(&mut self, data: &str) {
        if data.is_empty() {
            return;
        }
        match &mut self.state {
            #[cfg(feature = "sha1")]
            State::Sha1(hasher) => hasher.update(data.as_bytes()),
            State::Rolling(hash) => {
                *hash = hash
                    .wrapping_mul(ROLLING_MULTIPLIER)
                    .wrapping_add(i64::from(string_hash(data)));
            }
        }
    }

    /// Finish and render as lowercase hex
    pub fn finish(self) -> String {
        match self.state {
            #[cfg(feature = "sha1")]
            State::Sha1(hasher) => hex::encode(hasher.finalize()),
            State::Rolling(hash) => format!("{:x}", hash as u64),
        }
    }
}

/// 32-bit polynomial hash over UTF-16 code units
fn string_hash(data: &str) -> i32 {
    data.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}
