//! Repository layout
//!
//! Pure computations: relative paths for artifacts and metadata, and the
//! repository keys that keep metadata from different remote contexts apart.
//! Nothing here touches the filesystem.

pub mod digest;
pub mod key;
pub mod path;

pub use digest::{DigestAlgorithm, DigestPreference, Digester};
pub use key::repository_key;
pub use path::{artifact_path, metadata_path};
