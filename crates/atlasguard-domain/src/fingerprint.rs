use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a node finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - node path
pub fn fingerprint_for_node(check_id: &str, code: &str, node_path: &str) -> String {
    let canonical = [check_id, code, node_path].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_path_sensitive() {
        let a = fingerprint_for_node("atlas.cluster_count", "cluster_limit_exceeded", "S/A");
        let again = fingerprint_for_node("atlas.cluster_count", "cluster_limit_exceeded", "S/A");
        let b = fingerprint_for_node("atlas.cluster_count", "cluster_limit_exceeded", "S/B");
        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
    }
}
