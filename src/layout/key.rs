//! Repository key derivation
//!
//! A repository key separates cached metadata fetched from the same
//! repository id under different dynamic contexts.

use crate::layout::digest::DigestAlgorithm;
use crate::model::RemoteRepository;

/// Compute the key identifying `repository` for a request made in `context`.
///
/// Static repositories are keyed by id alone. Repository managers get
/// `<id>-<digest>` where the digest covers the context followed by the
/// mirrored repository ids, de-duplicated and sorted by UTF-16 code units.
pub fn repository_key(
    repository: &RemoteRepository,
    context: &str,
    algorithm: DigestAlgorithm,
) -> String {
    if !repository.is_repository_manager() {
        return repository.id().to_string();
    }

    let mut mirrored: Vec<&str> = repository
        .mirrored_repositories()
        .iter()
        .map(RemoteRepository::id)
        .collect();
    mirrored.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    mirrored.dedup();

    let mut digester = algorithm.digester();
    digester.update(context);
    for id in mirrored {
        digester.update(id);
    }

    format!("{}-{}", repository.id(), digester.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: &str) -> RemoteRepository {
        RemoteRepository::new(id, "").unwrap()
    }

    fn manager(id: &str, mirrored: &[&str]) -> RemoteRepository {
        repo(id)
            .with_repository_manager(true)
            .with_mirrored(mirrored.iter().map(|m| repo(m)).collect())
    }

    #[test]
    fn static_repository_keys_by_id() {
        let central = repo("central").with_mirrored(vec![repo("a"), repo("b")]);
        assert_eq!(
            repository_key(&central, "release", DigestAlgorithm::Rolling),
            "central"
        );
        assert_eq!(
            repository_key(&central, "", DigestAlgorithm::detect()),
            "central"
        );
    }

    #[test]
    fn manager_key_is_order_independent() {
        let ab = manager("nexus", &["a", "b"]);
        let ba = manager("nexus", &["b", "a"]);
        let algorithm = DigestAlgorithm::detect();
        assert_eq!(
            repository_key(&ab, "release", algorithm),
            repository_key(&ba, "release", algorithm)
        );
    }

    #[test]
    fn manager_key_depends_on_context_and_mirrors() {
        let algorithm = DigestAlgorithm::detect();
        let base = repository_key(&manager("nexus", &["a"]), "release", algorithm);
        assert_ne!(
            base,
            repository_key(&manager("nexus", &["a"]), "snapshot", algorithm)
        );
        assert_ne!(
            base,
            repository_key(&manager("nexus", &["a", "c"]), "release", algorithm)
        );
    }

    #[test]
    fn duplicate_mirror_ids_count_once() {
        let algorithm = DigestAlgorithm::detect();
        assert_eq!(
            repository_key(&manager("nexus", &["a", "b", "a"]), "release", algorithm),
            repository_key(&manager("nexus", &["a", "b"]), "release", algorithm)
        );
    }

    #[test]
    fn mirror_ids_sort_by_utf16_units() {
        // U+FF21 sorts before U+1F600 as UTF-8 bytes but after it as UTF-16
        let key = repository_key(
            &manager("nexus", &["\u{FF21}", "\u{1F600}"]),
            "release",
            DigestAlgorithm::Rolling,
        );

        let mut digester = DigestAlgorithm::Rolling.digester();
        digester.update("release");
        digester.update("\u{1F600}");
        digester.update("\u{FF21}");
        assert_eq!(key, format!("nexus-{}", digester.finish()));
    }

    #[test]
    fn manager_key_with_rolling_hash() {
        let key = repository_key(
            &manager("nexus", &["b", "a"]),
            "release",
            DigestAlgorithm::Rolling,
        );
        assert_eq!(key, "nexus-f4055d373b");
    }

    #[cfg(feature = "sha1")]
    #[test]
    fn manager_key_with_sha1() {
        let key = repository_key(
            &manager("nexus", &["b", "a"]),
            "release",
            DigestAlgorithm::Sha1,
        );
        assert_eq!(key, "nexus-938be4dfa5fb7c14915c8425dc62a032a276c2f6");
    }

    #[cfg(feature = "sha1")]
    #[test]
    fn manager_key_without_context_or_mirrors() {
        let key = repository_key(&manager("nexus", &[]), "", DigestAlgorithm::Sha1);
        assert_eq!(key, "nexus-da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }
}
