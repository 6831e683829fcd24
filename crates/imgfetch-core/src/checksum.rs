//! Content digests for downloaded payloads.
//!
//! Payloads are already fully buffered in memory, so hashing works on byte
//! slices rather than files.

use sha2::{Digest, Sha256};

/// Number of hex characters of the digest embedded in unique filenames.
pub const SHORT_DIGEST_LEN: usize = 8;

/// Compute SHA-256 of `data` and return the digest as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    hex::encode(digest)
}

/// First [`SHORT_DIGEST_LEN`] hex characters of the SHA-256 of `data`.
pub fn short_digest(data: &[u8]) -> String {
    let mut full = sha256_hex(data);
    full.truncate(SHORT_DIGEST_LEN);
    full
}
