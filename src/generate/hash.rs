//! Hash digest generation.
//!
//! Computes the four digests the tool has always shown together — MD5,
//! SHA-1, SHA-256, SHA-512 — as lowercase hex. MD5 and SHA-1 are provided
//! for checksum interop, not for anything security-sensitive.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// All four digests of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashReport {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    pub sha512: String,
}

fn hex_digest<D: Digest>(input: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(input);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Digest `input` with all four algorithms.
pub fn digest_all(input: &str) -> HashReport {
    let bytes = input.as_bytes();
    HashReport {
        md5: hex_digest::<Md5>(bytes),
        sha1: hex_digest::<Sha1>(bytes),
        sha256: hex_digest::<Sha256>(bytes),
        sha512: hex_digest::<Sha512>(bytes),
    }
}
