//! Conditional request support
//!
//! `ETag` generation and `If-None-Match` evaluation for 304 responses.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute a quoted `ETag` for a file's content.
///
/// The tag hashes both the bytes and the length, so truncated content
/// produces a different tag.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.len().hash(&mut hasher);
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Evaluate a client's `If-None-Match` header against our `ETag`.
///
/// Accepts a single tag, a comma-separated list, or `*`. Returns true when
/// the client's copy is current and a 304 should be sent.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == etag || candidate == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_is_quoted() {
        let etag = generate_etag(b"body");
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn same_content_same_tag() {
        assert_eq!(generate_etag(b"abc"), generate_etag(b"abc"));
    }

    #[test]
    fn different_content_different_tag() {
        assert_ne!(generate_etag(b"abc"), generate_etag(b"abd"));
    }

    #[test]
    fn if_none_match_forms() {
        let etag = generate_etag(b"x");
        assert!(etag_matches(Some(&etag), &etag));
        assert!(etag_matches(Some(&format!("\"other\", {etag}")), &etag));
        assert!(etag_matches(Some("*"), &etag));
        assert!(!etag_matches(Some("\"other\""), &etag));
        assert!(!etag_matches(None, &etag));
    }
}
