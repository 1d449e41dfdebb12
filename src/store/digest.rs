//! Digest-to-filename translation.
//!
//! Manifests name blobs by `algorithm:hex` digest; on disk the `:` is
//! replaced with `-` so the name is filesystem-safe. Restore tooling must
//! apply the same substitution, so this mapping is a stable contract of
//! the store layout rather than an implementation detail.

/// Translate a manifest digest (`algorithm:hex`) into its on-disk blob
/// file name (`algorithm-hex`).
///
/// Applied exactly once per digest. Neither the algorithm nor the hex
/// portion is validated.
pub fn blob_file_name(digest: &str) -> String {
    digest.replace(':', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_separator() {
        assert_eq!(blob_file_name("sha256:aaaa"), "sha256-aaaa");
    }

    #[test]
    fn test_no_separator_unchanged() {
        assert_eq!(blob_file_name("sha256-aaaa"), "sha256-aaaa");
    }

    #[test]
    fn test_all_separators_rewritten() {
        assert_eq!(blob_file_name("a:b:c"), "a-b-c");
        assert!(!blob_file_name("a:b:c").contains(':'));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(blob_file_name(""), "");
    }
}
