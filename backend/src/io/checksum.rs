//! Dataset fingerprinting.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the raw source bytes.
///
/// Reported by the health endpoint so clients can tell which launch table a
/// server instance was started with.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
