//! Content hashing for end-to-end verification.
//!
//! The hash covers the original UTF-8 text, not the container, so it catches
//! both storage corruption and any drift in how the tree is rebuilt.

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Length of a hex-encoded SHA-256 digest.
pub const HASH_HEX_LEN: usize = 64;

/// SHA-256 of `text` as lowercase hex.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::default();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Fails unless `text` hashes to `expected`.
pub fn verify(expected: &str, text: &str) -> Result<()> {
    let actual = content_hash(text);
    if actual.as_bytes() != expected.as_bytes() {
        crate::if_tracing! {
            tracing::warn!(%expected, %actual, "integrity check failed");
        }
        return Err(Error::IntegrityMismatch {
            expected: expected.to_owned(),
            actual,
        });
    }
    Ok(())
}

/// Whether `s` looks like the output of [`content_hash`].
pub fn is_hash_text(s: &str) -> bool {
    s.len() == HASH_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
