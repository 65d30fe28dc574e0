//! Deterministic per-analysis metadata.
//!
//! Collaborators (persistence, deduplication caches) key on the content hash
//! and consume the word/sentence counts; the engine itself never reads any
//! of this back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Metadata describing one analysis call.
///
/// Deterministic given identical input text, except for the duration and
/// timestamp fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMetadata {
    /// SHA-256 of the normalized text, lowercase hex.
    pub content_hash: String,
    /// Unicode word count over the normalized text.
    pub word_count: usize,
    /// Sentence count as seen by the segmenter.
    pub sentence_count: usize,
    /// Named entities, when an external extractor supplied them. The engine
    /// itself never populates this.
    pub optional_entities: Option<Vec<String>>,
    /// Wall-clock duration of the analysis call.
    pub processing_duration_ms: u64,
    pub analyzed_at: DateTime<Utc>,
}

/// Deterministic fingerprint of normalized contract text.
///
/// Identical normalized text always produces the identical hash; callers use
/// it for deduplication and result caching, keyed together with the role.
pub fn content_hash(normalized_text: &str) -> String {
    format!("{:x}", Sha256::digest(normalized_text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let a = content_hash("a empresa não poderá rescindir");
        let b = content_hash("a empresa não poderá rescindir");
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_changes_with_content() {
        assert_ne!(content_hash("cláusula primeira"), content_hash("cláusula segunda"));
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let hash = content_hash("texto");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_known_vector() {
        // SHA-256 of the empty string.
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
